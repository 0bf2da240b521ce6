use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use url::Url;
#[cfg(test)]
pub mod tests;

#[derive(Debug, Parser)]
#[command(about = "Generates bounded-size thumbnails for images stored in S3.")]
pub struct Args {
    /// Bucket the thumbnails are written to.
    #[arg(long, env = "OUTPUT_BUCKET")]
    pub output_bucket: String,
    /// Maximum thumbnail width in pixels.
    #[arg(long, env = "THUMB_W")]
    #[arg(default_value = "300", value_parser = clap::value_parser!(u32).range(1..))]
    pub thumb_w: u32,
    /// Maximum thumbnail height in pixels.
    #[arg(long, env = "THUMB_H")]
    #[arg(default_value = "300", value_parser = clap::value_parser!(u32).range(1..))]
    pub thumb_h: u32,
    #[arg(long, env = "LISTEN_ADDRESS")]
    #[arg(default_value = "0.0.0.0:3030")]
    pub listen_address: SocketAddr,
    /// Custom S3 endpoint (LocalStack, MinIO and the like).
    #[arg(long, env = "AWS_ENDPOINT_URL")]
    pub s3_endpoint_url: Option<Url>,
    #[arg(long, env = "S3_FORCE_PATH_STYLE")]
    pub s3_force_path_style: bool,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run a single invocation and print its result as JSON.
    Invoke {
        #[arg(long)]
        bucket: String,
        #[arg(long)]
        key: String,
    },
}
