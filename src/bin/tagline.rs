// Tagline CLI: loads a runner JSON report and re-emits it as the tagged
// line protocol. Usage: tagline emit <report.json> [--root-dir DIR]

fn main() {
    tagline::cli::run();
}
