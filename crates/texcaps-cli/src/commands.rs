use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;
use texcaps_catalog::{AspectInfo, Aspects, FormatCatalog, FormatDescriptor, TextureFormat};
use texcaps_query::{CapabilityReport, DeviceFeatures, DeviceQuery, TextureAspect};

use crate::config::{Command, Output};

pub fn run(
    catalog: &FormatCatalog,
    features: &DeviceFeatures,
    command: &Command,
    output: Output,
    out: &mut dyn Write,
) -> Result<()> {
    let query = DeviceQuery::new(catalog, features);
    tracing::debug!(?command, %features, "running command");

    match command {
        Command::List {
            group,
            enabled_only,
        } => {
            let formats = catalog.group(*group).iter().copied();
            let formats: Vec<TextureFormat> = if *enabled_only {
                query.enabled_formats(formats)
            } else {
                formats.collect()
            };
            match output {
                Output::Json => write_json(out, &formats)?,
                Output::Text => {
                    for format in formats {
                        writeln!(out, "{format}")?;
                    }
                }
            }
        }
        Command::Show { format } => {
            let desc = catalog.get(*format);
            match output {
                Output::Json => write_json(out, desc)?,
                Output::Text => write_descriptor(out, desc)?,
            }
        }
        Command::Caps { format } => {
            let report = query.report(*format);
            match output {
                Output::Json => write_json(out, &report)?,
                Output::Text => write_report(out, &report)?,
            }
        }
        Command::BytesPerSample { formats } => {
            let bytes = query
                .structural()
                .compute_bytes_per_sample(formats)
                .context("cannot pack color attachments")?;
            match output {
                Output::Json => write_json(
                    out,
                    &BytesPerSample {
                        formats,
                        bytes_per_sample: bytes,
                    },
                )?,
                Output::Text => writeln!(out, "{bytes}")?,
            }
        }
        Command::Aspect { format, aspect } => {
            let resolved = query
                .structural()
                .resolve_aspect_format(*format, *aspect)
                .with_context(|| format!("cannot resolve {aspect} of {format}"))?;
            match output {
                Output::Json => write_json(
                    out,
                    &ResolvedAspect {
                        format: *format,
                        aspect: *aspect,
                        resolved,
                    },
                )?,
                Output::Text => writeln!(out, "{resolved}")?,
            }
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct BytesPerSample<'a> {
    formats: &'a [TextureFormat],
    bytes_per_sample: u32,
}

#[derive(Serialize)]
struct ResolvedAspect {
    format: TextureFormat,
    aspect: TextureAspect,
    resolved: TextureFormat,
}

fn write_json<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).context("failed to serialize output")?;
    writeln!(out)?;
    Ok(())
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

fn optional<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "none".to_string(), |v| v.to_string())
}

fn write_aspect(out: &mut dyn Write, name: &str, info: &AspectInfo) -> Result<()> {
    writeln!(
        out,
        "  {name}: sample-kind={} copy-src={} copy-dst={} storage={} read-write-storage={} bytes={}",
        info.sample_kind,
        yes_no(info.copy_src),
        yes_no(info.copy_dst),
        yes_no(info.storage),
        yes_no(info.read_write_storage),
        info.bytes
            .map_or_else(|| "undefined".to_string(), |b| b.to_string()),
    )?;
    Ok(())
}

fn write_descriptor(out: &mut dyn Write, desc: &FormatDescriptor) -> Result<()> {
    writeln!(out, "format: {}", desc.format)?;
    writeln!(out, "family: {}", desc.family)?;
    writeln!(out, "block: {}x{}", desc.block_width, desc.block_height)?;
    writeln!(
        out,
        "bytes-per-block: {}",
        desc.bytes_per_block
            .map_or_else(|| "undefined".to_string(), |b| b.to_string())
    )?;
    writeln!(out, "aspects:")?;
    match &desc.aspects {
        Aspects::Color(info) => write_aspect(out, "color", info)?,
        Aspects::Depth(info) => write_aspect(out, "depth", info)?,
        Aspects::Stencil(info) => write_aspect(out, "stencil", info)?,
        Aspects::DepthStencil { depth, stencil } => {
            write_aspect(out, "depth", depth)?;
            write_aspect(out, "stencil", stencil)?;
        }
    }
    match (desc.color_render, desc.gated_render) {
        (Some(info), _) => writeln!(
            out,
            "color-render: blendable={} resolvable={} byte-cost={} alignment={}",
            yes_no(info.blendable),
            yes_no(info.resolvable),
            info.byte_cost,
            info.alignment
        )?,
        (None, Some(gated)) => writeln!(
            out,
            "color-render: with {} (byte-cost={} alignment={})",
            gated.feature, gated.info.byte_cost, gated.info.alignment
        )?,
        (None, None) => writeln!(out, "color-render: none")?,
    }
    writeln!(out, "multisample: {}", yes_no(desc.multisample))?;
    writeln!(out, "required-feature: {}", optional(desc.required_feature))?;
    writeln!(out, "base-format: {}", optional(desc.base_format))?;
    Ok(())
}

fn join<T: std::fmt::Display>(items: &[T]) -> String {
    if items.is_empty() {
        return "none".to_string();
    }
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

fn write_report(out: &mut dyn Write, report: &CapabilityReport) -> Result<()> {
    writeln!(out, "format: {}", report.format)?;
    writeln!(out, "required-feature: {}", optional(report.required_feature))?;
    for (label, value) in report.flags() {
        writeln!(out, "{label}: {}", yes_no(value))?;
    }
    writeln!(out, "dimensions: {}", join(&report.dimensions))?;
    writeln!(out, "view-formats: {}", join(&report.view_formats))?;
    Ok(())
}
