//! CGPA Calc entry point
//!
//! Native builds print the averages of an exported document. The browser
//! build starts from `platform::web`.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use cgpa_calc::{Settings, Summary};

    env_logger::init();

    let settings = Settings::load();
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| settings.export_filename().to_string());

    let mut doc = settings.new_document();
    if let Err(e) = cgpa_calc::platform::load_from_path(&mut doc, &path) {
        log::error!("{}: {}", path, e);
        std::process::exit(1);
    }

    let summary = Summary::of(&doc);
    println!("{}", summary.scale);
    for sem in &summary.semesters {
        println!("  {:<24} SGPA {:>6}  ({} credits)", sem.name, sem.sgpa, sem.credits);
    }
    println!("CGPA {} out of {}", summary.cgpa, summary.out_of);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::start, this is just to satisfy the compiler
}
