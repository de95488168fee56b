//! validate-bindings — decode and check an AsyncAPI bindings object
//!
//! Usage:
//!   validate-bindings <file> --attachment <server|channel|operation|message> [--strict] [--print]
//!
//! The file holds a single bindings object (JSON or YAML, chosen by extension),
//! e.g. the value of `channels.<name>.bindings` in an AsyncAPI document.

use asyncapi_bindings::binding::{
    AttachmentPoint, Binding, BindingAttachment, BindingCodec, BindingValidator, ChannelBinding,
    CodecConfig, MessageBinding, OperationBinding, ServerBinding, UnknownProtocolPolicy,
};
use asyncapi_bindings::{Error, ErrorContext};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

struct Options {
    file: PathBuf,
    attachment: AttachmentPoint,
    strict: bool,
    print: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return Ok(());
    }
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{message}");
            eprintln!();
            print_usage();
            std::process::exit(2);
        }
    };

    let mut config = CodecConfig::from_env()?;
    if options.strict {
        config.unknown_protocols = UnknownProtocolPolicy::Reject;
    }
    let codec = BindingCodec::with_config(config);
    let validator = BindingValidator::new()?;

    let result = match options.attachment {
        AttachmentPoint::Server => check::<ServerBinding>(&codec, &validator, &options),
        AttachmentPoint::Channel => check::<ChannelBinding>(&codec, &validator, &options),
        AttachmentPoint::Operation => check::<OperationBinding>(&codec, &validator, &options),
        AttachmentPoint::Message => check::<MessageBinding>(&codec, &validator, &options),
    };

    match result {
        Ok(()) => {
            println!("✅ {} is valid", options.file.display());
            Ok(())
        }
        Err(e) => {
            println!("❌ {}", options.file.display());
            println!("{e}");
            std::process::exit(1);
        }
    }
}

fn check<V: Binding>(
    codec: &BindingCodec,
    validator: &BindingValidator,
    options: &Options,
) -> asyncapi_bindings::Result<()> {
    let bindings: BindingAttachment<V> = codec.decode_file(&options.file)?;
    summarize(&bindings);

    validator.validate_attachment(&bindings).map_err(|e| {
        Error::validation_with_context(
            e.to_string(),
            ErrorContext::new()
                .with_field_path(options.file.display().to_string())
                .with_source("validate_bindings"),
        )
    })?;

    if options.print {
        println!("{}", codec.encode_string(&bindings)?);
    }
    Ok(())
}

fn summarize<V: Binding>(bindings: &BindingAttachment<V>) {
    for (protocol, binding) in bindings.iter() {
        tracing::info!(%protocol, ?binding, "binding");
    }
    for key in bindings.unrecognized().keys() {
        println!("  {key}: not modeled at {} level, kept as-is", V::ATTACHMENT);
    }
    println!(
        "{} {} binding(s): {}",
        bindings.len(),
        V::ATTACHMENT,
        bindings
            .protocols()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut file = None;
    let mut attachment = None;
    let mut strict = false;
    let mut print = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--attachment" | "-a" => {
                let value = iter
                    .next()
                    .ok_or_else(|| "--attachment requires a value".to_string())?;
                attachment = Some(value.parse::<AttachmentPoint>()?);
            }
            "--strict" => strict = true,
            "--print" => print = true,
            other if other.starts_with('-') => return Err(format!("Unknown option: {other}")),
            other => {
                if file.replace(PathBuf::from(other)).is_some() {
                    return Err("Only one file may be given".to_string());
                }
            }
        }
    }

    Ok(Options {
        file: file.ok_or_else(|| "Missing bindings file".to_string())?,
        attachment: attachment.ok_or_else(|| "Missing --attachment".to_string())?,
        strict,
        print,
    })
}

fn print_usage() {
    println!(
        r#"validate-bindings — check an AsyncAPI bindings object

USAGE:
    validate-bindings <FILE> --attachment <server|channel|operation|message> [OPTIONS]

OPTIONS:
    -a, --attachment <POINT>    Attachment point the bindings belong to
    --strict                    Reject protocol keys not modeled at this point
    --print                     Print the normalized bindings (JSON or YAML, see below)
    -h, --help                  Show this help message

ENVIRONMENT:
    ASYNCAPI_BINDINGS_FORMAT               json | yaml: output format, and input format for
                                           files without a .json/.yaml extension
    ASYNCAPI_BINDINGS_PRETTY               Pretty-print JSON output (default: true)
    ASYNCAPI_BINDINGS_UNKNOWN_PROTOCOLS    preserve | ignore | reject
    RUST_LOG                               Log filter (default: warn)"#
    );
}
