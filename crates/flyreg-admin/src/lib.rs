mod client;
mod error;
mod grpc;

pub use client::AdminClient;
pub use error::AdminError;
pub use grpc::GrpcAdminClient;
