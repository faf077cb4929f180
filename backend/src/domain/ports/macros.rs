//! Helper macro for declaring port error enums.
//!
//! Each variant carries named fields and gets a snake_case constructor whose
//! parameters accept `impl Into<T>`, so adapters can write
//! `UserPersistenceError::query(err.to_string())` or pass a `&str`.

macro_rules! define_port_error {
    (@ctor $variant:ident ($($params:tt)*) ($($inits:tt)*)) => {
        ::paste::paste! {
            #[doc = "Construct the `" $variant "` variant."]
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };

    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),* $(,)? } => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $($field : $ty),* },
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant () () $( $field : $ty, )*);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    //! Regression coverage for generated constructors and messages.
    define_port_error! {
        pub enum StoreError {
            Offline { message: String } => "store offline: {message}",
            Rejected { message: String, code: u16 } => "store rejected ({code}): {message}",
        }
    }

    #[test]
    fn constructors_accept_str_for_string_fields() {
        let err = StoreError::offline("connection refused");
        assert_eq!(err.to_string(), "store offline: connection refused");
    }

    #[test]
    fn constructors_support_mixed_fields() {
        let err = StoreError::rejected("duplicate email", 23505_u16);
        assert_eq!(err.to_string(), "store rejected (23505): duplicate email");
    }
}
