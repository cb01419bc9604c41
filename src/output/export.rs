//! CSV export of the full ranking

use crate::analysis::ResultSummary;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// CSV header line
pub const CSV_HEADER: &str = "rank,guess,num_patterns,p_solve_in_2";

/// Write the ranking as CSV, best guess first
///
/// # Errors
///
/// Returns any I/O error from the writer.
pub fn write_csv<W: Write>(summary: &ResultSummary, mut writer: W) -> io::Result<()> {
    writeln!(writer, "{CSV_HEADER}")?;
    for row in summary.ranking() {
        writeln!(
            writer,
            "{},{},{},{:.8}",
            row.rank, row.guess, row.distinct_patterns, row.probability
        )?;
    }
    writer.flush()
}

/// Save the ranking as a CSV file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn save_csv<P: AsRef<Path>>(summary: &ResultSummary, path: P) -> io::Result<()> {
    let file = File::create(path.as_ref())?;
    write_csv(summary, BufWriter::new(file))?;
    log::info!("Full ranked results saved to {}", path.as_ref().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::compute_all_profiles;
    use crate::core::Candidate;

    #[test]
    fn csv_rows_in_rank_order() {
        let candidates: Vec<Candidate> = ["AAB", "ABA", "BAA", "ABC", "CAB", "BBB"]
            .into_iter()
            .map(|s| Candidate::new(s).unwrap())
            .collect();
        let summary = compute_all_profiles(&candidates).unwrap();

        let mut buf = Vec::new();
        write_csv(&summary, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(lines[1], "1,AAB,5,0.83333333");
        assert_eq!(lines[6], "6,BBB,3,0.50000000");
    }
}
