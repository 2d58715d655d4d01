/// Fat Time
/// A packed date and time pair as stored in a directory entry, with a granularity of 2 seconds
///
/// date: bits 15-9 years since 1980, bits 8-5 month, bits 4-0 day
/// time: bits 15-11 hours, bits 10-5 minutes, bits 4-0 seconds divided by 2
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FatTime {
    pub time: u16,
    pub date: u16,
}

impl FatTime {
    pub fn new(time: u16, date: u16) -> Self {
        Self { time, date }
    }

    /// Unpacks the date and time fields into calendar components
    pub fn decode(&self) -> FatDateTime {
        decode_date_time(self.date, self.time)
    }
}

impl core::fmt::Debug for FatTime {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("FatTime")
            .field(&self.decode().to_string())
            .finish()
    }
}

/// The calendar components of a [`FatTime`]
///
/// Values are extracted from the bit fields as is: a corrupt entry can produce a month of 0 or
/// an hour of 31, and no attempt is made to reject them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FatDateTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    /// Always even, the low bit is not stored
    pub second: u8,
}

/// Unpacks a packed FAT date and time
pub fn decode_date_time(date: u16, time: u16) -> FatDateTime {
    FatDateTime {
        year: 1980 + (date >> 9),
        month: ((date >> 5) & 0x0F) as u8,
        day: (date & 0x1F) as u8,
        hour: (time >> 11) as u8,
        minute: ((time >> 5) & 0x3F) as u8,
        second: ((time & 0x1F) * 2) as u8,
    }
}

impl FatDateTime {
    /// Packs the components back into the on-disk `(date, time)` pair
    ///
    /// Components are masked to their field widths and the second is rounded down to an even value.
    pub fn encode(&self) -> (u16, u16) {
        let date = (self.year.wrapping_sub(1980) & 0x7F) << 9
            | (self.month as u16 & 0x0F) << 5
            | (self.day as u16 & 0x1F);
        let time = (self.hour as u16 & 0x1F) << 11
            | (self.minute as u16 & 0x3F) << 5
            | (self.second as u16 / 2 & 0x1F);
        (date, time)
    }

    /// Converts to a chrono date time, if the components form a valid calendar date and time
    #[cfg(feature = "chrono")]
    pub fn to_naive(&self) -> Option<chrono::NaiveDateTime> {
        chrono::NaiveDate::from_ymd_opt(self.year as i32, self.month as u32, self.day as u32)?
            .and_hms_opt(self.hour as u32, self.minute as u32, self.second as u32)
    }
}

impl core::fmt::Display for FatDateTime {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}
