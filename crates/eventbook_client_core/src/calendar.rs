//! Calendar view: events per day and a Sunday-first month grid.

use std::collections::BTreeMap;

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::models::Event;

pub fn events_on(events: &[Event], day: NaiveDate) -> Vec<&Event> {
    events.iter().filter(|e| e.date == day).collect()
}

pub fn event_counts_by_day(events: &[Event]) -> BTreeMap<NaiveDate, usize> {
    let mut counts = BTreeMap::new();
    for e in events {
        *counts.entry(e.date).or_insert(0) += 1;
    }
    counts
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub event_count: usize,
}

/// A month laid out in weeks; `None` cells fall outside the month.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonthGrid {
    pub first_day: NaiveDate,
    pub weeks: Vec<[Option<CalendarDay>; 7]>,
}

impl MonthGrid {
    pub fn title(&self) -> String {
        self.first_day.format("%B %Y").to_string()
    }

    pub fn previous(&self) -> Option<NaiveDate> {
        self.first_day.checked_sub_months(Months::new(1))
    }

    pub fn next(&self) -> Option<NaiveDate> {
        self.first_day.checked_add_months(Months::new(1))
    }

    pub fn days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.weeks.iter().flat_map(|w| w.iter().flatten())
    }
}

/// Grid for the month containing `any_day`.
pub fn month_grid(any_day: NaiveDate, events: &[Event]) -> MonthGrid {
    let first_day = any_day.with_day(1).unwrap_or(any_day);
    let counts = event_counts_by_day(events);
    let lead = first_day.weekday().num_days_from_sunday() as usize;

    let mut weeks = Vec::new();
    let mut week: [Option<CalendarDay>; 7] = [None; 7];
    let mut slot = lead;
    let mut day = first_day;
    while day.month() == first_day.month() {
        week[slot] = Some(CalendarDay {
            date: day,
            event_count: counts.get(&day).copied().unwrap_or(0),
        });
        slot += 1;
        if slot == 7 {
            weeks.push(week);
            week = [None; 7];
            slot = 0;
        }
        day = match day.checked_add_days(Days::new(1)) {
            Some(d) => d,
            None => break,
        };
    }
    if slot > 0 {
        weeks.push(week);
    }

    MonthGrid { first_day, weeks }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::EventId;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn event(id: i64, date: NaiveDate) -> Event {
        Event {
            id: EventId(id),
            title: format!("Event {}", id),
            description: String::new(),
            image: None,
            price: None,
            location: "Hall".to_string(),
            date,
            time: None,
            available_seats: 10,
        }
    }

    #[test]
    fn groups_by_day() {
        let events = vec![
            event(1, ymd(2025, 6, 1)),
            event(2, ymd(2025, 6, 1)),
            event(3, ymd(2025, 6, 9)),
        ];
        assert_eq!(events_on(&events, ymd(2025, 6, 1)).len(), 2);
        assert!(events_on(&events, ymd(2025, 6, 2)).is_empty());
        let counts = event_counts_by_day(&events);
        assert_eq!(counts.get(&ymd(2025, 6, 9)), Some(&1));
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn june_2025_starts_on_sunday() {
        let events = vec![event(1, ymd(2025, 6, 1)), event(2, ymd(2025, 7, 1))];
        let grid = month_grid(ymd(2025, 6, 18), &events);
        assert_eq!(grid.first_day, ymd(2025, 6, 1));
        assert_eq!(grid.title(), "June 2025");
        assert_eq!(grid.weeks.len(), 5);
        assert_eq!(grid.weeks[0][0].map(|d| d.event_count), Some(1));
        assert_eq!(grid.days().count(), 30);
        assert_eq!(grid.days().map(|d| d.event_count).sum::<usize>(), 1);
    }

    #[test]
    fn leading_cells_are_empty() {
        // 1 Feb 2025 is a Saturday.
        let grid = month_grid(ymd(2025, 2, 10), &[]);
        assert!(grid.weeks[0][..6].iter().all(Option::is_none));
        assert_eq!(grid.weeks[0][6].map(|d| d.date), Some(ymd(2025, 2, 1)));
        assert_eq!(grid.days().count(), 28);
        assert_eq!(grid.previous(), Some(ymd(2025, 1, 1)));
        assert_eq!(grid.next(), Some(ymd(2025, 3, 1)));
    }
}
