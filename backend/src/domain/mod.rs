//! Domain primitives, services, and ports.
//!
//! Purpose: define the user entity, the transport-agnostic error type, and the
//! service that sits between inbound adapters and the persistence port.
//!
//! Public surface:
//! - Error / ErrorCode: failure payload mapped to status codes by adapters.
//! - User / NewUser / UserId: the persisted entity and its create candidate.
//! - UserService: business logic implementing the driving ports.
//! - TraceId: request-scoped correlation identifier.

pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_service;

pub use self::error::{Error, ErrorCode};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{NewUser, User, UserId};
pub use self::user_service::UserService;
