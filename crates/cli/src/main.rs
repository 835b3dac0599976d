// ABOUTME: CLI for the el DOM construction helpers.
// ABOUTME: Renders tag descriptors to HTML and exposes descriptor parsing, template fill and distance as JSON.

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use el_dom::{
    distance_to_rect, fill, Attributes, Child, Distance, Document, El, Piece, Point, Rect,
    StyleMap, StyleValue, TagDescriptor,
};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

/// Build DOM elements from compact tag descriptors.
#[derive(Parser, Debug)]
#[command(name = "el")]
#[command(about = "Render tag descriptors to HTML and run el helpers", long_about = None)]
struct Args {
    /// Output compact JSON instead of pretty.
    #[arg(long, global = true, default_value_t = false)]
    compact: bool,

    /// Log debug output to stderr (RUST_LOG overrides).
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build an element and print its HTML.
    Render {
        /// Tag descriptor such as `div#main.a.b`.
        descriptor: String,

        /// Text child; newlines become <br>. Repeatable.
        #[arg(long = "text")]
        texts: Vec<String>,

        /// Attribute as name=value. Repeatable.
        #[arg(long = "attr")]
        attrs: Vec<String>,

        /// Inline style as key=value; numeric values get px unless unitless. Repeatable.
        #[arg(long = "style")]
        styles: Vec<String>,

        /// Base image path; adds src and a @2x/@3x srcset.
        #[arg(long)]
        image: Option<String>,
    },

    /// Parse a descriptor and print it as JSON.
    Parse { descriptor: String },

    /// Splice a replacement into every occurrence of a marker.
    Fill {
        template: String,

        #[arg(long)]
        target: String,

        #[arg(long = "with")]
        replacement: String,
    },

    /// Distance from a point to a box.
    Distance {
        /// Box edges as left,top,right,bottom.
        #[arg(long, allow_hyphen_values = true)]
        rect: String,

        /// Point as left,top.
        #[arg(long, allow_hyphen_values = true)]
        point: String,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);
    tracing::debug!(command = ?args.command, compact = args.compact, "parsed arguments");

    match args.command {
        Command::Render {
            descriptor,
            texts,
            attrs,
            styles,
            image,
        } => {
            let html = render(&descriptor, &texts, &attrs, &styles, image.as_deref())?;
            println!("{}", html);
        }
        Command::Parse { descriptor } => {
            let parsed = TagDescriptor::parse(&descriptor);
            print_json(&serde_json::to_value(parsed)?, args.compact)?;
        }
        Command::Fill {
            template,
            target,
            replacement,
        } => {
            let pieces = fill(&[Piece::from(template)], &target, &Piece::from(replacement));
            print_json(&serde_json::to_value(pieces)?, args.compact)?;
        }
        Command::Distance { rect, point } => {
            let [left, top, right, bottom] = parse_numbers::<4>(&rect).context("--rect")?;
            let [x, y] = parse_numbers::<2>(&point).context("--point")?;
            let rect = Rect::new(left, top, right, bottom);
            let result = Distance {
                rect,
                distance: distance_to_rect(rect, Point::new(x, y)),
            };
            print_json(&serde_json::to_value(result)?, args.compact)?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn render(
    descriptor: &str,
    texts: &[String],
    attrs: &[String],
    styles: &[String],
    image: Option<&str>,
) -> Result<String> {
    let mut attributes = Attributes::new();
    for pair in attrs {
        let (name, value) = split_pair(pair)?;
        attributes.insert(name, value);
    }

    let mut style = StyleMap::new();
    for pair in styles {
        let (key, value) = split_pair(pair)?;
        let value = match value.parse::<f64>() {
            Ok(n) => StyleValue::Number(n),
            Err(_) => StyleValue::Text(value.to_string()),
        };
        style.insert(key, value);
    }
    if !style.is_empty() {
        attributes = attributes.style(style);
    }

    let mut children: Vec<Child> = texts.iter().map(Child::from).collect();
    children.push(Child::Attributes(attributes));

    let mut doc = Document::new();
    let el = El::default();
    let node = match image {
        Some(src) => el.res_image(&mut doc, descriptor, src, children)?,
        None => el.create(&mut doc, descriptor, children)?,
    };
    Ok(doc.outer_html(node))
}

fn split_pair(pair: &str) -> Result<(&str, &str)> {
    pair.split_once('=')
        .ok_or_else(|| anyhow!("expected name=value, got {:?}", pair))
}

fn parse_numbers<const N: usize>(s: &str) -> Result<[f64; N]> {
    let values = s
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .with_context(|| format!("not a number: {:?}", part))
        })
        .collect::<Result<Vec<_>>>()?;
    if values.len() != N {
        bail!("expected {} comma-separated numbers, got {}", N, values.len());
    }
    let mut out = [0.0; N];
    out.copy_from_slice(&values);
    Ok(out)
}

fn print_json(value: &Value, compact: bool) -> Result<()> {
    if compact {
        println!("{}", serde_json::to_string(value)?);
    } else {
        println!("{}", serde_json::to_string_pretty(value)?);
    }
    Ok(())
}
