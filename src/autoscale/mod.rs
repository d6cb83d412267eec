//! Autoscale API domain: endpoints, request payloads and response models.

pub mod endpoint;
pub mod payload;
pub mod response;


pub use endpoint::Endpoints;
pub use payload::{
    GroupOptions, GroupRequest, PolicySpec, WebhookSpec, build_group_request,
    build_webhook_request, parse_metadata,
};
pub use response::{CreatedGroup, CreatedPolicy, CreatedWebhook};
