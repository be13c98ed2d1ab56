// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # ewk
//!
//! Command-line interface for the elementwise activation kernels.
//!
//! ## Usage
//! ```bash
//! # Run a pipeline over a tensor stored as JSON
//! ewk apply --pipeline gated.toml --input x.json --output y.json
//!
//! # Infer the output shape of a pipeline
//! ewk shape --pipeline gated.toml --shape 8,64,32,32
//!
//! # List available operators
//! ewk ops
//! ```

mod commands;
mod tensor_file;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "ewk",
    about = "Elementwise activation kernels: relu, leaky_relu, prelu, glu",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a pipeline of activations to a JSON tensor.
    Apply {
        /// Path to the pipeline TOML file.
        #[arg(short, long)]
        pipeline: std::path::PathBuf,

        /// Path to the input tensor (JSON: shape, dtype, data).
        #[arg(short, long)]
        input: std::path::PathBuf,

        /// Where to write the result; stdout when omitted.
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
    },

    /// Print the output shape a pipeline produces for an input shape.
    Shape {
        /// Path to the pipeline TOML file.
        #[arg(short, long)]
        pipeline: std::path::PathBuf,

        /// Comma-separated input dimensions (e.g., "8,64,32,32").
        #[arg(short, long)]
        shape: String,
    },

    /// List the available operators and their fusion patterns.
    Ops,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    commands::init_tracing(cli.verbose);

    match cli.command {
        Commands::Apply {
            pipeline,
            input,
            output,
        } => commands::apply::execute(pipeline, input, output),
        Commands::Shape { pipeline, shape } => commands::shape::execute(pipeline, shape),
        Commands::Ops => commands::ops::execute(),
    }
}
