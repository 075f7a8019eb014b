//! Domain types and models
//!
//! Wire types follow the JSON shapes served by the Convoy UI API
//! (snake_case fields, camelCase pagination).

pub mod auth;
pub mod event;
pub mod http;
pub mod organisation;
pub mod project;
pub mod query;
pub mod scope;

pub use auth::{AuthToken, LoginRequest, LoginResponse};
pub use event::{DeliveryMetadata, DeliveryStatus, Event, EventDelivery};
pub use http::{ErrorBody, FieldError, HttpFailure, HttpResponse, Paged, Pagination, StatusField};
pub use organisation::Organisation;
pub use project::{App, Project, ProjectType, Source};
pub use query::{
    AppsQuery, EventDeliveriesQuery, EventsQuery, OrganisationsQuery, SourcesQuery,
};
pub use scope::ScopeContext;
