mod config;
mod contexts;
mod linkkit;
mod render;
mod templates;

use anyhow::{Context as _, Result, bail};
use chrono::Local;
use clap::{Parser, ValueEnum};
use component_model::{Component, GlobalConfig, parse_assignments};
use serde::Serialize;
use std::fs;
use tracing::info;

use crate::config::Config;
use crate::contexts::MakeFragmentContext;
use crate::linkkit::linkkit_component;
use crate::render::{emit, render_fragment};
use crate::templates::COMPONENT_MK;

#[derive(Parser)]
struct Cli {
    /// 配置文件地址，[global] 表作为全局配置
    #[arg(short, long, default_value = "")]
    config: String,
    /// KEY=VALUE 形式的配置覆盖，后应用于配置文件
    #[arg(short, long)]
    set: Vec<String>,
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    format: Format,
    /// 输出文件，缺省输出到 stdout
    #[arg(short, long)]
    out: Option<String>,
    #[arg(long)]
    force: bool,
}

#[derive(Debug, Copy, Clone, ValueEnum)]
enum Format {
    Json,
    Make,
}

#[derive(Serialize)]
struct DescriptorOutput<'a> {
    component: &'a Component,
    config: &'a GlobalConfig,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let mut global = if cli.config.is_empty() {
        GlobalConfig::default()
    } else {
        let text = fs::read_to_string(&cli.config)
            .with_context(|| format!("read config {}", cli.config))?;
        let config: Config = toml::from_str(&text)
            .with_context(|| format!("parse config {}", cli.config))?;
        config.global
    };

    for assign in &cli.set {
        let parsed = parse_assignments(assign);
        if parsed.is_empty() {
            bail!("invalid --set override: {}", assign);
        }
        for (key, value) in parsed {
            global.set(key, value);
        }
    }

    let component = linkkit_component(&mut global);
    info!("Described component {}", component.name);

    let output = match cli.format {
        Format::Json => {
            let record = DescriptorOutput {
                component: &component,
                config: &global,
            };
            let mut json = serde_json::to_string_pretty(&record)?;
            json.push('\n');
            json
        }
        Format::Make => {
            let date = Local::now().format("%Y-%m-%d").to_string();
            let source_list = component.sources.join(" ");
            let dep_list = component.deps.join(" ");
            let define_list = component
                .global_macros
                .iter()
                .map(|m| format!("-D{}", m))
                .collect::<Vec<_>>()
                .join(" ");
            let config_list = global
                .iter()
                .map(|(k, v)| format!("{} := {}", k, v))
                .collect::<Vec<_>>()
                .join("\n");

            let ctx = MakeFragmentContext {
                name: &component.name,
                date: &date,
                source_list: &source_list,
                dep_list: &dep_list,
                define_list: &define_list,
                config_list: &config_list,
            };
            render_fragment(COMPONENT_MK, &ctx)
        }
    };

    emit(cli.out.as_deref(), &output, cli.force)?;
    Ok(())
}
