use crate::types::{Summary, WeatherTable};
use crate::util::{argmax, argmin, average, format_int, format_verbatim, sample_std_dev};
use std::io::{self, Write};

pub const RULE_WIDTH: usize = 50;

pub fn summarize(table: &WeatherTable) -> Summary {
    let temps = table.temperatures();
    let records = table.records();
    // non-empty table: both extremes exist
    let (hot_idx, max) = argmax(&temps).unwrap_or((0, table.first().temperature));
    let (cool_idx, min) = argmin(&temps).unwrap_or((0, table.first().temperature));
    Summary {
        count: table.len(),
        first_date: table.first().date.clone(),
        last_date: table.last().date.clone(),
        mean: average(&temps),
        max,
        min,
        range: max - min,
        std_dev: sample_std_dev(&temps),
        hottest: records[hot_idx].clone(),
        coolest: records[cool_idx].clone(),
    }
}

pub fn print_statistics<W: Write>(out: &mut W, s: &Summary) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out, "\n{}", rule)?;
    writeln!(out, "📊 WEATHER DATA STATISTICS")?;
    writeln!(out, "{}", rule)?;
    writeln!(out, "📅 Date Range: {} to {}", s.first_date, s.last_date)?;
    writeln!(out, "🧾 Records: {}", format_int(s.count))?;
    writeln!(out, "🌡️  Average Temperature: {:.1}°C", s.mean)?;
    writeln!(out, "🔥 Highest Temperature: {:.1}°C", s.max)?;
    writeln!(out, "❄️  Lowest Temperature: {:.1}°C", s.min)?;
    writeln!(out, "📏 Temperature Range: {:.1}°C", s.range)?;
    match s.std_dev {
        Some(sd) => writeln!(out, "📈 Standard Deviation: {:.1}°C", sd)?,
        None => writeln!(out, "📈 Standard Deviation: n/a (single record)")?,
    }
    writeln!(
        out,
        "\n🔥 Hottest Day: {} ({}°C)",
        s.hottest.date,
        format_verbatim(s.hottest.temperature)
    )?;
    writeln!(
        out,
        "❄️  Coolest Day: {} ({}°C)",
        s.coolest.date,
        format_verbatim(s.coolest.temperature)
    )?;
    Ok(())
}
