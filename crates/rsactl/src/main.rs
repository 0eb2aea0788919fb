// Copyright [2026] [Joseph Verdicchio]
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// Copyright (c) 2026 Joseph Verdicchio and Contributors
// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

mod render;

use clap::{Parser, Subcommand, ValueEnum};
use rsa_core::scenarios::{find_scenario, handout_scenarios, Scenario};
use rsa_core::{GameReport, ParameterOverrides, ReferenceGame};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "rsactl")]
#[command(about = "Print Rational Speech Acts predictions for reference games")]
struct Cli {
    #[arg(long, default_value = "info", global = true)]
    log: String,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the canned scenarios.
    List,
    /// Print the canned scenarios and their three prediction matrices.
    Scenarios {
        #[arg(long)]
        only: Option<String>,
        #[arg(long, value_enum, default_value_t = Format::Table)]
        format: Format,
    },
    /// Solve a reference game, the hat/glasses game unless --game is given.
    Solve {
        #[arg(long)]
        game: Option<PathBuf>,
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        prior: Option<Vec<f64>>,
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        costs: Option<Vec<f64>>,
        #[arg(long)]
        alpha: Option<f64>,
        #[arg(long, value_enum, default_value_t = Format::Table)]
        format: Format,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Table,
    Json,
}

#[derive(Debug, Serialize)]
struct SolvedGame<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    slug: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    game: &'a ReferenceGame,
    report: GameReport,
}

fn write_table(out: &mut impl Write, solved: &SolvedGame<'_>) -> std::io::Result<()> {
    if let Some(title) = solved.title {
        writeln!(out, "{}", "=".repeat(70))?;
        writeln!(out, "{title}\n")?;
    }
    write!(out, "{}", render::render_game(solved.game))?;
    writeln!(out, "\nLiteral listener")?;
    write!(out, "{}", render::render_matrix(&solved.report.literal_listener))?;
    writeln!(out, "\nPragmatic speaker")?;
    write!(out, "{}", render::render_matrix(&solved.report.speaker))?;
    writeln!(out, "\nPragmatic listener")?;
    write!(out, "{}", render::render_matrix(&solved.report.listener))?;
    Ok(())
}

fn emit(
    out: &mut impl Write,
    format: Format,
    solved: &[SolvedGame<'_>],
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        Format::Table => {
            for s in solved {
                write_table(out, s)?;
            }
        }
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, solved)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn load_game(path: Option<&PathBuf>) -> Result<ReferenceGame, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            let bytes = fs::read(path)?;
            let game = ReferenceGame::from_json(&bytes)?;
            tracing::info!(path=%path.display(), messages=game.messages.len(), states=game.states.len(), "loaded reference game");
            Ok(game)
        }
        None => Ok(ReferenceGame::core_lexicon([0.5, 0.5], [0.0, 0.0])),
    }
}

fn run(cmd: Command, out: &mut impl Write) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Command::List => {
            for s in handout_scenarios() {
                writeln!(out, "{:<14} {}", s.slug, s.title)?;
            }
        }
        Command::Scenarios { only, format } => {
            let scenarios: Vec<Scenario> = match only {
                Some(slug) => vec![find_scenario(&slug).ok_or_else(|| {
                    std::io::Error::new(
                        std::io::ErrorKind::InvalidInput,
                        format!("unknown scenario {slug:?}"),
                    )
                })?],
                None => handout_scenarios(),
            };
            let mut solved = Vec::with_capacity(scenarios.len());
            for s in &scenarios {
                solved.push(SolvedGame {
                    slug: Some(s.slug),
                    title: Some(s.title),
                    game: &s.game,
                    report: s.game.solve()?,
                });
            }
            emit(out, format, &solved)?;
        }
        Command::Solve {
            game,
            prior,
            costs,
            alpha,
            format,
        } => {
            let overrides = ParameterOverrides {
                prior,
                costs,
                alpha,
            };
            overrides
                .validate()
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
            if !overrides.is_empty() {
                tracing::debug!(?overrides, "applying parameter overrides");
            }
            let game = load_game(game.as_ref())?.with_overrides(&overrides);
            let report = game.solve()?;
            let solved = [SolvedGame {
                slug: None,
                title: None,
                game: &game,
                report,
            }];
            emit(out, format, &solved)?;
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cli.log))
        .with_writer(std::io::stderr)
        .init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(cli.cmd, &mut out)
}
