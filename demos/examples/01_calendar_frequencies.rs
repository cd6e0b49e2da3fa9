use cadence::{Cadence, FrequencyKind, KeyOrder, RawOptions, WeekStart};
use cadence_demos::common::sample_series;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let series = sample_series();

    // 1. ISO weeks, output in first-seen order.
    let iso = Cadence::builder().build();
    // 2. Sunday-start weeks, output sorted by period end.
    let us = Cadence::builder()
        .week_start(WeekStart::Sunday)
        .key_order(KeyOrder::Chronological)
        .build();

    for frequency in FrequencyKind::ALL {
        let opts = RawOptions::new(Some(frequency.as_str()), Some("sum"));
        println!("{frequency} (sum)");
        for (label, cadence) in [("iso", &iso), ("sunday", &us)] {
            let out = cadence.resample_series(&series, &opts)?;
            let rendered: Vec<String> = out
                .iter()
                .map(|r| format!("{}={}", r.key(), r.value()))
                .collect();
            println!("  {label:<7} {}", rendered.join(", "));
        }
    }

    Ok(())
}
