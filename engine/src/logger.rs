use serde::{Deserialize, Serialize};

use crate::currency::Cents;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Purchase {
    pub name: String,
    pub tickets: u32,
}

/// One JSONL line per completed round.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub round_id: String,
    pub seed: Option<u64>,
    pub purchases: Vec<Purchase>,
    pub grand_winner: String,
    pub second_winners: Vec<String>,
    pub third_winners: Vec<String>,
    pub house_profit: Cents,
    #[serde(default)]
    pub ts: Option<String>,
}

pub fn format_round_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{SecondsFormat, Utc};

pub struct RoundLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl RoundLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_round_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &RoundRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).expect("serialize");
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
