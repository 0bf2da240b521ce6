use crate::cli::{Args, Command};
use clap::Parser;
use std::{net::SocketAddr, str::FromStr};

pub fn fake_args() -> Args {
    Args {
        output_bucket: String::from("thumbnails-test"),
        thumb_w: 300,
        thumb_h: 300,
        listen_address: SocketAddr::from_str("0.0.0.0:3030")
            .expect("Failed co construct fake listen address."),
        s3_endpoint_url: None,
        s3_force_path_style: false,
        command: None,
    }
}

#[test]
fn test_thumbnail_bounds_default_to_300() {
    let args = Args::try_parse_from(["thumbnailer", "--output-bucket", "out"])
        .expect("Failed to parse minimal arguments.");

    assert_eq!(args.output_bucket, "out");
    assert_eq!((args.thumb_w, args.thumb_h), (300, 300));
    assert!(args.command.is_none());
}

#[test]
fn test_zero_thumbnail_bound_is_rejected() {
    let result = Args::try_parse_from(["thumbnailer", "--output-bucket", "out", "--thumb-w", "0"]);

    assert!(result.is_err());
}

#[test]
fn test_invoke_subcommand() {
    let args = Args::try_parse_from([
        "thumbnailer",
        "--output-bucket",
        "out",
        "--thumb-h",
        "120",
        "invoke",
        "--bucket",
        "in",
        "--key",
        "photos/cat.png",
    ])
    .expect("Failed to parse invoke arguments.");

    assert_eq!(args.thumb_h, 120);
    match args.command {
        Some(Command::Invoke { bucket, key }) => {
            assert_eq!(bucket, "in");
            assert_eq!(key, "photos/cat.png");
        }
        None => panic!("Expected the `invoke` subcommand."),
    }
}
