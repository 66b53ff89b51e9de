//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `studydesk_core` linkage.
//! - Act as a stand-in presentation layer: it owns both registries, drives
//!   mutations, and re-derives display lines from returned positions.
//! - Keep output deterministic for quick local sanity checks.

use studydesk_core::{material_line, task_line, MaterialRegistry, TaskRegistry};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("studydesk_core version={}", studydesk_core::core_version());

    let mut materials = MaterialRegistry::new();
    let mut tasks = TaskRegistry::new();

    let algebra = materials.add("Algebra Notes", "Math", "/tmp/a.pdf")?;
    materials.add("Cell Biology", "Biology", "/tmp/cells.pdf")?;
    let essay = tasks.add("Essay", "2024-01-01")?;
    tasks.add("Flashcards", "Friday")?;

    println!("materials ({}):", materials.len());
    for material in materials.iter() {
        println!("  {}", material_line(material));
    }

    tasks.complete(essay)?;

    println!("tasks ({}):", tasks.len());
    for task in tasks.iter() {
        println!("  {}", task_line(task));
    }

    // Opening the file is the host's job; the core only supplies the path.
    println!("open target: {}", materials.get(algebra)?.file_path);

    Ok(())
}
