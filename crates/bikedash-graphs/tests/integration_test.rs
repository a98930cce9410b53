//! Integration tests for bikedash-graphs crate.

use bikedash_common::test_utils::{date, init_test_logging, record, sample_records};
use bikedash_config::GraphsConfig;
use bikedash_data::{Dataset, DateRange};
use bikedash_graphs::{
    bar_tones, BarTone, ChartStyle, GraphManager, GraphRenderer, RentalsByWeekdayGraph,
};
use proptest::prelude::*;

fn style() -> ChartStyle {
    ChartStyle::from_config(&GraphsConfig::default()).expect("default style")
}

#[tokio::test]
async fn test_pipeline_renders_every_chart() {
    init_test_logging();
    let dataset = Dataset::from_records(sample_records()).unwrap();
    let manager = GraphManager::new(style());

    let data = dataset.dashboard(dataset.full_range());
    let charts = manager.render_all(&data).await.unwrap();

    assert!(charts.daily_total.contains("Daily Rentals Over Time"));
    assert!(charts.daily_registered.contains("Daily Registered User Rentals Over Time"));
    assert!(charts.daily_casual.contains("Daily Casual User Rentals Over Time"));
    assert!(charts.by_weekday.contains("Average Total Rental Amount by Day"));
    assert!(charts.by_hour.contains("Average Total Rental Amount by Hour"));
    assert!(charts.by_season.contains("Total Rental Amount by Season"));
}

#[tokio::test]
async fn test_tied_weekdays_are_all_highlighted() {
    // Saturday and Sunday share the highest mean, Monday is lowest.
    let records = vec![
        record(1, date(2011, 1, 1), 9, 6, 1, 10, 10),
        record(2, date(2011, 1, 2), 9, 0, 1, 10, 10),
        record(3, date(2011, 1, 3), 9, 1, 1, 1, 1),
    ];
    let dataset = Dataset::from_records(records).unwrap();
    let data = dataset.dashboard(dataset.full_range());

    let values: Vec<Option<f64>> = data
        .weekday
        .iter()
        .map(|b| (b.rows > 0).then_some(b.total_mean))
        .collect();
    let tones = bar_tones(&values);
    assert_eq!(tones[0], BarTone::Max);
    assert_eq!(tones[6], BarTone::Max);
    assert_eq!(tones[1], BarTone::Min);
    assert!(tones[2..6].iter().all(|t| *t == BarTone::Neutral));

    let svg = RentalsByWeekdayGraph.render(&data.weekday, &style()).await.unwrap();
    assert!(svg.contains("#EF5350"));
    assert!(svg.contains("#66BB6A"));
}

#[tokio::test]
async fn test_filtered_out_range_renders_empty_charts() {
    let dataset = Dataset::from_records(sample_records()).unwrap();
    let data = dataset.dashboard(DateRange::new(date(2011, 1, 5), date(2011, 1, 9)));
    assert_eq!(data.rows, 0);

    let charts = GraphManager::new(style()).render_all(&data).await.unwrap();
    assert!(charts.daily_total.starts_with("<svg"));
    assert!(!charts.by_hour.contains("#EF5350"));
}

proptest! {
    #[test]
    fn tones_mark_every_extreme(values in prop::collection::vec(prop::option::of(0u32..50), 1..24)) {
        let values: Vec<Option<f64>> = values.into_iter().map(|v| v.map(f64::from)).collect();
        let tones = bar_tones(&values);
        prop_assert_eq!(tones.len(), values.len());

        let present: Vec<f64> = values.iter().flatten().copied().collect();
        let max = present.iter().copied().reduce(f64::max);
        for (value, tone) in values.iter().zip(&tones) {
            match value {
                None => prop_assert_eq!(*tone, BarTone::Neutral),
                Some(v) if Some(*v) == max => prop_assert_eq!(*tone, BarTone::Max),
                Some(_) => prop_assert_ne!(*tone, BarTone::Max),
            }
        }
        if !present.is_empty() {
            prop_assert!(tones.contains(&BarTone::Max));
        }
    }
}
