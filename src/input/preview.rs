// src/input/preview.rs
use csv::{ReaderBuilder, StringRecord, Trim};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourlyReading {
    pub hour: f64,
    pub kwh: f64,
}

/// What the input panel draws for CSV data before it is sent off.
/// Nothing here feeds the analysis; the model gets the raw text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConsumptionPreview {
    pub readings: Vec<HourlyReading>,
    pub skipped_rows: usize,
}

impl ConsumptionPreview {
    /// Reads the first two numeric columns of each row. A header row, if
    /// any, is recognised by failing to parse and counted as skipped.
    pub fn from_csv(text: &str) -> Self {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(text.as_bytes());

        let mut preview = ConsumptionPreview::default();
        for record in reader.records() {
            match record.ok().as_ref().and_then(parse_row) {
                Some(reading) => preview.readings.push(reading),
                None => preview.skipped_rows += 1,
            }
        }
        preview
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}

fn parse_row(record: &StringRecord) -> Option<HourlyReading> {
    let hour = record.get(0)?.parse::<f64>().ok()?;
    let kwh = record.get(1)?.parse::<f64>().ok()?;
    Some(HourlyReading { hour, kwh })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::SAMPLE_CSV;

    #[test]
    fn sample_has_24_readings() {
        let preview = ConsumptionPreview::from_csv(SAMPLE_CSV);
        assert_eq!(preview.readings.len(), 24);
        assert_eq!(preview.skipped_rows, 1); // header
        assert_eq!(preview.readings[0], HourlyReading { hour: 0.0, kwh: 0.5 });
        assert_eq!(preview.readings[18], HourlyReading { hour: 18.0, kwh: 4.2 });
    }

    #[test]
    fn malformed_rows_are_skipped() {
        let preview = ConsumptionPreview::from_csv("hour,kwh\n1, 2.5\nbad row\n2,\n3,1.0,extra\n");
        assert_eq!(
            preview.readings,
            vec![
                HourlyReading { hour: 1.0, kwh: 2.5 },
                HourlyReading { hour: 3.0, kwh: 1.0 },
            ]
        );
        assert_eq!(preview.skipped_rows, 3);
    }

    #[test]
    fn empty_text() {
        assert!(ConsumptionPreview::from_csv("").is_empty());
    }
}
