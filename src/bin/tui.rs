use anyhow::Result;

fn main() -> Result<()> {
    evcal::tui::run()
}
