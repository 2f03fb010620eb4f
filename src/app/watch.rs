use std::collections::VecDeque;

use crate::sniffer::Sniffer;

/// Reads a sniffed value as an unsigned integer, `0x`-prefixed hex or decimal.
pub fn parse_numeric(value: &str) -> Option<u64> {
    let value = value.trim();
    match value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(hex, 16).ok(),
        None => value.parse().ok(),
    }
}

/// Repeated readings of one address.
pub struct Watch {
    sniffer: Sniffer,
    address: String,
    capacity: usize,
    pub latest: Option<String>,
    pub last_error: Option<String>,
    pub samples: u64,
    pub errors: u64,
    pub history: VecDeque<u64>,
}

impl Watch {
    pub fn new(sniffer: Sniffer, address: impl Into<String>, capacity: usize) -> Self {
        Self {
            sniffer,
            address: address.into(),
            capacity,
            latest: None,
            last_error: None,
            samples: 0,
            errors: 0,
            history: VecDeque::new(),
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn sniffer(&self) -> &Sniffer {
        &self.sniffer
    }

    /// Takes one reading. A failed reading is counted and kept as text; it
    /// does not stop the watch.
    pub fn poll(&mut self) {
        match self.sniffer.sniff(&self.address) {
            Ok(value) => {
                self.samples += 1;
                if let Some(n) = parse_numeric(&value) {
                    self.record(n);
                }
                self.latest = Some(value);
            }
            Err(e) => {
                self.errors += 1;
                self.last_error = Some(e.to_string());
            }
        }
    }

    fn record(&mut self, n: u64) {
        if self.capacity == 0 {
            return;
        }
        while self.history.len() >= self.capacity {
            self.history.pop_front();
        }
        self.history.push_back(n);
    }
}
