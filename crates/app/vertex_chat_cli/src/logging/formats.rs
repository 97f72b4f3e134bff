use flexi_logger::{DeferredNow, Record, style};

/// `LEVEL message`, level coloured when stdout is a terminal.
pub fn cli_format(
    w: &mut dyn std::io::Write,
    _now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    let level = record.level();
    write!(w, "{} {}", style(level).paint(level.to_string()), record.args())
}
