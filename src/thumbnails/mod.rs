use crate::cli::Args;
use crate::thumbnails::env::{AWS_ACCESS_KEY_ID, AWS_REGION, AWS_SECRET_ACCESS_KEY};
use crate::warn_if_env_var_is_missing;

pub mod env;
pub mod errors;
pub mod handlers;
pub mod img;
pub mod keys;
pub mod pipeline;
pub mod requests;
pub mod responses;
pub mod s3;
pub mod storage;

#[cfg(test)]
pub mod memory;

pub fn init(args: &Args) {
    warn_if_env_var_is_missing!(AWS_REGION, "Falling back to the AWS profile configuration.");
    warn_if_env_var_is_missing!(AWS_ACCESS_KEY_ID, "Falling back to the AWS credentials chain.");
    warn_if_env_var_is_missing!(
        AWS_SECRET_ACCESS_KEY,
        "Falling back to the AWS credentials chain."
    );
    if args.s3_endpoint_url.is_none() {
        tracing::info!("No custom S3 endpoint configured. Will use global AWS S3.");
    }
}
