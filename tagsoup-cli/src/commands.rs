//! Subcommands and what they print.

use std::fmt::Write as _;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use serde_json::json;
use tagsoup_markup::options::DEFAULT_MAX_DEPTH;
use tagsoup_markup::{
    PruneOptions, RepairOptions, StripOptions, classify_tag, escape_script_tags,
    find_all_attributes_for_tag, get_attributes_for_tag, remove_empty_pair_tags_with,
    repair_with, strip_tags_with, tokenize,
};

/// Where the markup comes from
#[derive(Args, Debug)]
pub struct Input {
    /// Path to a markup file (stdin is read when neither FILE nor --html is given)
    #[arg(value_name = "FILE")]
    pub path: Option<PathBuf>,

    /// Process this markup string instead of a file
    #[arg(long, value_name = "HTML", conflicts_with = "path")]
    pub html: Option<String>,
}

impl Input {
    /// Load the markup.
    ///
    /// # Errors
    ///
    /// Fails if the file or stdin cannot be read as UTF-8.
    pub fn read(&self) -> Result<String> {
        if let Some(html) = &self.html {
            return Ok(html.clone());
        }
        if let Some(path) = &self.path {
            return fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()));
        }

        let mut markup = String::new();
        let _ = io::stdin()
            .read_to_string(&mut markup)
            .context("failed to read stdin")?;
        Ok(markup)
    }
}

/// Which tags `fix` expects a closer for
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Every tag without a trailing `/` needs a closer
    #[default]
    Xml,
    /// Void elements such as `<br>` and `<img>` stand alone
    Html,
}

impl Mode {
    const fn options(self) -> RepairOptions {
        match self {
            Self::Xml => RepairOptions::xml(),
            Self::Html => RepairOptions::html(),
        }
    }
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Remove tags and keep the text
    Strip {
        /// Also turn <br> into CRLF and &nbsp;/&ensp; into plain spaces
        #[arg(long)]
        smart: bool,

        #[command(flatten)]
        input: Input,
    },

    /// Remove paired tags that enclose nothing
    Prune {
        /// Give up on markup nested deeper than this
        #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_DEPTH)]
        max_depth: usize,

        #[command(flatten)]
        input: Input,
    },

    /// Close unclosed tags and drop orphaned closers
    Fix {
        /// Tag semantics to repair with
        #[arg(long, value_enum, default_value_t = Mode::Xml)]
        mode: Mode,

        #[command(flatten)]
        input: Input,
    },

    /// Entity-escape script tags, leaving everything else untouched
    EscapeScripts {
        #[command(flatten)]
        input: Input,
    },

    /// Print the attributes of a tag as JSON
    Attrs {
        /// Tag name to look for (case-insensitive)
        #[arg(long, value_name = "NAME")]
        tag: String,

        /// Byte offset to start searching from
        #[arg(long, value_name = "N", default_value_t = 0, conflicts_with = "all")]
        start: usize,

        /// Print every occurrence as a JSON array
        #[arg(long)]
        all: bool,

        #[command(flatten)]
        input: Input,
    },

    /// Classify a single tag literal such as "<br/>"
    Classify {
        /// The tag, with or without its angle brackets
        #[arg(value_name = "LITERAL")]
        literal: String,
    },

    /// List every bracketed span with its classification
    Tokens {
        #[command(flatten)]
        input: Input,
    },
}

impl Command {
    /// Run the command and return what it prints.
    ///
    /// # Errors
    ///
    /// Fails if the input cannot be read, if an attribute lookup is given
    /// bad arguments, or if pruning gives up on deeply nested markup.
    pub fn run(&self) -> Result<String> {
        match self {
            Self::Strip { smart, input } => {
                let options = if *smart {
                    StripOptions::intelligent()
                } else {
                    StripOptions::default()
                };
                Ok(strip_tags_with(&input.read()?, options))
            }
            Self::Prune { max_depth, input } => {
                let options = PruneOptions {
                    max_depth: *max_depth,
                };
                remove_empty_pair_tags_with(&input.read()?, options)
                    .context("could not prune empty tags")
            }
            Self::Fix { mode, input } => Ok(repair_with(&input.read()?, mode.options())),
            Self::EscapeScripts { input } => Ok(escape_script_tags(&input.read()?)),
            Self::Attrs {
                tag,
                start,
                all,
                input,
            } => attributes_json(&input.read()?, tag, *start, *all),
            Self::Classify { literal } => {
                let (kind, name) = classify_tag(literal);
                Ok(json!({ "kind": kind, "name": name }).to_string())
            }
            Self::Tokens { input } => {
                let markup = input.read()?;
                let mut listing = String::new();
                for token in tokenize(&markup) {
                    writeln!(listing, "{token}")?;
                }
                Ok(listing)
            }
        }
    }
}

fn attributes_json(markup: &str, tag: &str, start: usize, all: bool) -> Result<String> {
    let context = || format!("could not look up attributes of <{tag}>");
    let json = if all {
        let found = find_all_attributes_for_tag(markup, tag).with_context(context)?;
        serde_json::to_string_pretty(&found)?
    } else {
        let found = get_attributes_for_tag(markup, tag, start).with_context(context)?;
        serde_json::to_string_pretty(&found)?
    };
    Ok(json)
}
