//! Classes command handler
//!
//! Lists the class levels with a season plan, marking the configured default.

use syllabus_tree::config::Config;
use syllabus_tree::verbose;

/// Run the classes command
pub fn run(config: &Config) {
    let catalog = match super::load_catalog() {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    println!("\n=== Class Levels ===\n");
    for structure in catalog.iter() {
        let marker = if structure.class_level == config.syllabus.default_class {
            '*'
        } else {
            ' '
        };
        println!(
            "{marker} Class {:<3} {} months, {} chapters",
            structure.class_level,
            structure.months.len(),
            structure.chapter_count()
        );
        for month in &structure.months {
            verbose!(
                "      {:>2}. {} ({} chapters)",
                month.month_number,
                month.title,
                month.chapter_count()
            );
        }
    }

    if catalog.get(&config.syllabus.default_class).is_none() {
        println!(
            "\n⚠️  Default class '{}' has no season plan. {}",
            config.syllabus.default_class,
            catalog.selection_hint()
        );
    }
}
