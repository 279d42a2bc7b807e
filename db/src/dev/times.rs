use chrono::prelude::*;

pub fn distant_past() -> NaiveDateTime {
    NaiveDate::from_ymd(2000, 1, 1).and_hms(20, 0, 0)
}

pub fn distant_future() -> NaiveDateTime {
    NaiveDate::from_ymd(2055, 1, 1).and_hms(20, 0, 0)
}
