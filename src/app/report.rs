use crate::domain::model::{Report, ServiceAssessment};
use std::fmt::Write as _;

const RULE: &str = "============================================================";

pub fn render_text(report: &Report) -> String {
    let mut out = String::new();

    if let Some(preamble) = &report.preamble {
        let _ = writeln!(out, "{}", preamble.trim_end());
    }

    let _ = writeln!(out, "\n{}", RULE);
    let _ = writeln!(out, "📊 COMPARISON RESULTS");
    let _ = writeln!(out, "{}", RULE);

    write_service(&mut out, "🔷", &report.result.managed);
    write_service(&mut out, "🔶", &report.result.hosted);

    let _ = writeln!(out, "\n{}", RULE);
    let _ = writeln!(out, "⚖️  VERDICT (Trade-off Based)");
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "\n{}", report.result.verdict);
    let _ = writeln!(out, "\n{}", RULE);

    out
}

fn write_service(out: &mut String, marker: &str, service: &ServiceAssessment) {
    let _ = writeln!(out, "\n{} {}", marker, service.name.to_uppercase());
    let _ = writeln!(out, "  ✅ Pros:");
    for pro in &service.pros {
        let _ = writeln!(out, "     • {}", pro);
    }
    let _ = writeln!(out, "  ❌ Cons:");
    for con in &service.cons {
        let _ = writeln!(out, "     • {}", con);
    }
}
