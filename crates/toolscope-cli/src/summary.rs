use std::path::Path;

use console::Style;
use toolscope_core::inspect::Inspection;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_inspection_summary(
    inspection: &Inspection,
    source: &str,
    r1: u32,
    r2: u32,
    output: &Path,
) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Alignment Snapshot"));
    println!("  {}", s.title.apply_to("\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}"));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Source"),
        s.value.apply_to(source)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Viewport"),
        s.value.apply_to(format!(
            "{}x{}",
            inspection.snapshot.width(),
            inspection.snapshot.height()
        ))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Rings"),
        s.value.apply_to(format!("{} px / {} px", r1, r2))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Focus"),
        s.value.apply_to(format!("{:.2}", inspection.variance))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(output.display())
    );
    println!();
}
