// src/cli.rs
use std::{env, path::PathBuf};

use crate::config::options::{AppOptions, ExportFormat};
use crate::filter::FilterQuery;
use crate::{file, loader};

pub struct Params {
    pub search: String,
    pub filters: Vec<(String, String)>,
    pub category: Option<String>,
    pub list_filters: bool,
    pub local: Option<PathBuf>,
    pub json: bool,
    pub out: Option<PathBuf>,
    pub format: ExportFormat,
    pub include_headers: bool,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            search: s!(),
            filters: Vec::new(),
            category: None,
            list_filters: false,
            local: None,
            json: false,
            out: None,
            format: ExportFormat::Csv,
            include_headers: true,
        }
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut params = Params::default();
    parse_cli(&mut params)?;

    let mut options = AppOptions::default();
    options.source.local_dir = params.local.clone();
    options.export.format = params.format;
    options.export.include_headers = params.include_headers;

    let site = loader::load_site(&options, None)?;

    if params.list_filters {
        for d in &site.filters {
            println!("{},{},{}", d.group, d.category, d.label);
        }
        return Ok(());
    }

    // Flat --category is sugar for a theme-only restriction; both modes run
    // through the same predicate path.
    let query = match &params.category {
        Some(cat) => FilterQuery::flat(cat).with_search(&params.search),
        None => FilterQuery {
            search: params.search.clone(),
            selected: params.filters.clone(),
        },
    };

    let view = crate::filter::filter_view(&site.activities, &query);

    if params.json {
        let owned = view.to_owned_activities();
        let text = serde_json::to_string_pretty(&owned)?;
        match &params.out {
            Some(p) => std::fs::write(p, text)?,
            None => println!("{}", text),
        }
        return Ok(());
    }

    match &params.out {
        Some(p) => {
            options.export.set_path(&p.to_string_lossy());
            let written = file::write_export_single(&options.export, &view)?;
            eprintln!("Wrote {} ({} activities)", written.display(), view.len());
        }
        None => print!("{}", file::to_export_string(&options.export, &view)),
    }

    Ok(())
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "-s" | "--search" => {
                params.search = args.next().ok_or("Missing value for --search")?;
            }
            "-f" | "--filter" => {
                let v = args.next().ok_or("Missing value for --filter")?;
                let (group, value) = v
                    .split_once('=')
                    .ok_or("Expected --filter GROUP=VALUE")?;
                params.filters.push((s!(group.trim()), s!(value.trim())));
            }
            "-c" | "--category" => {
                params.category = Some(args.next().ok_or("Missing value for --category")?);
            }
            "--list-filters" => params.list_filters = true,
            "--local" => {
                params.local = Some(PathBuf::from(
                    args.next().ok_or("Missing value for --local")?,
                ));
            }
            "--json" => params.json = true,
            "-o" | "--out" => {
                params.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?));
            }
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };
            }
            "--no-headers" => params.include_headers = false,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(())
}
