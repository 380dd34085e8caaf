//! Session command handler
//!
//! Feeds interaction commands to a [`SyllabusTreeView`] and prints the
//! navigation intents it reports. Commands come from a script file, or from
//! stdin one line at a time so the tree can be driven by hand.

use crate::args::RenderMode;
use std::cell::Cell;
use std::io::{self, BufRead};
use std::path::Path;
use std::str::FromStr;
use syllabus_tree::config::Config;
use syllabus_tree::report::{self, ReportFormat, ReportGenerator};
use syllabus_tree::session::{parse_line, parse_script, COMMANDS};
use syllabus_tree::view::{Interaction, SyllabusTreeView};
use syllabus_tree::{debug, error, info, verbose, warn};

/// Run the session command.
///
/// # Arguments
/// * `class` - Starting class level; falls back to config `default_class`
/// * `script` - Script file; stdin when `None`
/// * `render` - Print the view after each change or only at the end
/// * `format_str` - Format of printed views (text, markdown, html)
/// * `config` - Configuration with viewer bounds
pub fn run(
    class: Option<&str>,
    script: Option<&Path>,
    render: RenderMode,
    format_str: &str,
    config: &Config,
) {
    let class_level = class.unwrap_or(&config.syllabus.default_class);
    if let Err(err) = session(class_level, script, render, format_str, config) {
        error!("Session failed: {err}");
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("Commands (one per line, # for comments):");
    for (keyword, args) in COMMANDS {
        println!("  {keyword} {args}");
    }
}

fn print_view<N>(
    view: &SyllabusTreeView<N>,
    generator: &dyn ReportGenerator,
) -> Result<(), String>
where
    N: FnMut(&str, &str),
{
    let rendered = generator
        .render(&view.render())
        .map_err(|e| format!("✗ Failed to render view: {e}"))?;
    println!("{rendered}");
    Ok(())
}

/// Apply one interaction and print the view if asked to
fn step<N>(
    view: &mut SyllabusTreeView<N>,
    line: usize,
    interaction: Interaction,
    render: RenderMode,
    generator: &dyn ReportGenerator,
) -> Result<(), String>
where
    N: FnMut(&str, &str),
{
    debug!("line {line}: {interaction:?}");
    if view.handle(interaction) {
        if render == RenderMode::Each {
            print_view(view, generator)?;
        }
    } else {
        verbose!("line {line}: no change");
    }
    Ok(())
}

fn session(
    class_level: &str,
    script: Option<&Path>,
    render: RenderMode,
    format_str: &str,
    config: &Config,
) -> Result<(), String> {
    let format = ReportFormat::from_str(format_str)
        .map_err(|e| format!("✗ {e}. Use: text, markdown, or html"))?;

    let catalog = super::load_catalog()?;
    let settings = config.viewer_settings();
    let generator = report::generator(format, settings);

    let navigations = Cell::new(0_usize);
    let mut view = SyllabusTreeView::new(catalog, class_level, |subject: &str, chapter: &str| {
        navigations.set(navigations.get() + 1);
        println!("→ Navigate: {subject} / {chapter}");
    })
    .with_viewer_settings(settings);

    if render == RenderMode::Each {
        print_view(&view, generator.as_ref())?;
    }

    if let Some(path) = script {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("✗ Failed to read {}: {e}", path.display()))?;
        let interactions = parse_script(&text).map_err(|e| format!("✗ {}: {e}", path.display()))?;
        info!(
            "Running {} interaction(s) from {}",
            interactions.len(),
            path.display()
        );
        for (line, interaction) in interactions {
            step(&mut view, line, interaction, render, generator.as_ref())?;
        }
    } else {
        verbose!("Reading interactions from stdin");
        if render == RenderMode::Each {
            print_usage();
        }
        for (i, line) in io::stdin().lock().lines().enumerate() {
            let line = line.map_err(|e| format!("✗ Failed to read stdin: {e}"))?;
            match parse_line(&line) {
                Ok(Some(interaction)) => {
                    step(&mut view, i + 1, interaction, render, generator.as_ref())?;
                }
                Ok(None) => {}
                Err(e) => {
                    warn!("line {}: {e}", i + 1);
                    eprintln!("✗ line {}: {e}", i + 1);
                }
            }
        }
    }

    if render == RenderMode::Final {
        print_view(&view, generator.as_ref())?;
    }

    drop(view);
    println!("{} navigation intent(s)", navigations.get());
    Ok(())
}
