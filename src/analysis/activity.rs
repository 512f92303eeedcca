//! Posting-time patterns over raw activity timestamps

use std::collections::BTreeMap;
use std::collections::HashSet;

use chrono::Timelike;

use crate::analysis::result::ActivityPatterns;
use crate::analysis::result::ActivityRhythm;
use crate::analysis::result::Facet;
use crate::analysis::statistics::ratio;
use crate::models::RawUserData;

/// Night spans 22:00 through 06:59 UTC
pub fn is_night_hour(hour: u32) -> bool {
    hour >= 22 || hour <= 6
}

pub fn rhythm_for(night: usize, day: usize) -> ActivityRhythm {
    if night > day {
        ActivityRhythm::NightOwl
    } else if day > night * 2 {
        ActivityRhythm::EarlyBird
    } else {
        ActivityRhythm::Balanced
    }
}

/// Most frequent hour; ties go to the hour seen first
fn peak_hour(hours: &[u32]) -> Option<u32> {
    let mut counts: Vec<(u32, usize)> = Vec::new();
    for hour in hours {
        match counts.iter_mut().find(|(h, _)| h == hour) {
            Some((_, count)) => *count += 1,
            None => counts.push((*hour, 1)),
        }
    }

    let mut best: Option<(u32, usize)> = None;
    for (hour, count) in counts {
        if best.map_or(true, |(_, c)| count > c) {
            best = Some((hour, count));
        }
    }
    best.map(|(hour, _)| hour)
}

pub fn analyze_activity(data: &RawUserData) -> Facet<ActivityPatterns> {
    let total_activities = data.activity_count();
    let timestamps: Vec<_> = data
        .activities()
        .filter_map(|(_, item)| item.created_at())
        .collect();

    let hours: Vec<u32> = timestamps.iter().map(|t| t.hour()).collect();
    let Some(peak_hour) = peak_hour(&hours) else {
        return Facet::Empty;
    };

    let mut hour_distribution = BTreeMap::new();
    for hour in &hours {
        *hour_distribution.entry(*hour).or_insert(0usize) += 1;
    }

    let distinct_dates: HashSet<_> = timestamps.iter().map(|t| t.date_naive()).collect();
    let night = hours.iter().filter(|h| is_night_hour(**h)).count();
    let day = hours.len() - night;

    Facet::Ready(ActivityPatterns {
        total_activities,
        activity_frequency: ratio(total_activities as f64, distinct_dates.len() as f64),
        peak_hour,
        activity_pattern: rhythm_for(night, day),
        hour_distribution,
        night_activity_ratio: ratio(night as f64, hours.len() as f64),
    })
}
