use clap::Parser;
use std::process::ExitCode;

mod app_context;
mod cli;
mod health;
mod http;
mod logging;
mod thumbnails;

use cli::{Args, Command};
use thumbnails::requests::InvocationRequest;
use thumbnails::responses::InvocationResponse;
use thumbnails::s3::S3Client;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(&args);
    thumbnails::init(&args);
    let s3_client = S3Client::from_args(&args).await;
    let app_context = app_context::init(&args, s3_client);

    match args.command {
        Some(Command::Invoke { bucket, key }) => {
            let result = app_context
                .pipeline
                .process(InvocationRequest::new(bucket, key))
                .await;
            let response = InvocationResponse::from(result);
            match serde_json::to_string_pretty(&response) {
                Ok(json) => println!("{json}"),
                Err(err) => tracing::error!("Failed to serialize the invocation result: {err}"),
            }
            if response.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        None => {
            let router = http::router::new(app_context);
            let listener = tokio::net::TcpListener::bind(args.listen_address)
                .await
                .expect("Failed to bind to the listen address.");
            tracing::info!("Listening on {}.", args.listen_address);
            axum::serve(listener, router)
                .with_graceful_shutdown(http::shutdown_signal())
                .await
                .expect("Failed to run the HTTP server.");
            ExitCode::SUCCESS
        }
    }
}
