use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::loan::Schedule;

/// Serializes a schedule as CSV: a fixed header, then one line per month with
/// the monetary columns formatted to two decimal places.
pub fn write_schedule<W: Write>(schedule: &Schedule, mut writer: W) -> io::Result<()> {
    writeln!(writer, "Month,Payment,Principal,Interest,Remaining Balance")?;
    for row in schedule.rows() {
        writeln!(
            writer,
            "{},{:.2},{:.2},{:.2},{:.2}",
            row.month,
            row.payment,
            row.principal_portion,
            row.interest_portion,
            row.remaining_balance
        )?;
    }
    Ok(())
}

/// Writes the schedule to a file at `path`, creating or truncating it.
pub fn write_schedule_to_file<P: AsRef<Path>>(schedule: &Schedule, path: P) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_schedule(schedule, &mut writer)?;
    writer.flush()
}
