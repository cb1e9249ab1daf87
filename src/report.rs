//! Console rendering of the report sections and raw trip rows.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use console::style;

use crate::analytics::bucketing::{hour_label, month_name};
use crate::analytics::{self, DurationStats, StationStats, TimeStats, UserStats, ValueCount};
use crate::model::{City, Filter, Trip, TripTable};
use crate::prompt::SEPARATOR_WIDTH;

pub const NO_DATA: &str = "No trips match the selected filter.";
pub const NO_MORE_ROWS: &str = "No more rows to display.";
pub const NO_DURATIONS: &str = "No trip durations recorded.";
/// Shown in place of a station or cell with no recorded value.
pub const MISSING: &str = "-";

/// Run `f` and measure how long it took.
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let started = Instant::now();
    let value = f();
    (value, started.elapsed())
}

/// Minutes as shown in reports: always at least one decimal (`1.0`, `1.67`).
pub fn format_minutes(minutes: f64) -> String {
    if minutes.fract() == 0.0 {
        format!("{minutes:.1}")
    } else {
        format!("{minutes}")
    }
}

/// Numeric cell: whole numbers without a decimal point.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    styled: bool,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::for_terminal()
    }
}

impl Renderer {
    pub fn new(styled: bool) -> Self {
        Self { styled }
    }

    /// Style headers only when stdout is a color-capable terminal.
    pub fn for_terminal() -> Self {
        Self::new(console::colors_enabled())
    }

    fn header<W: Write>(&self, out: &mut W, text: String) -> io::Result<()> {
        writeln!(
            out,
            "\n{}\n",
            style(text).bold().cyan().force_styling(self.styled)
        )
    }

    fn footer<W: Write>(&self, out: &mut W, elapsed: Duration) -> io::Result<()> {
        writeln!(out, "\nThis took {} seconds.", elapsed.as_secs_f64())?;
        writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))
    }

    /// Compute and print all four sections in their fixed order.
    pub fn full_report<W: Write>(
        &self,
        out: &mut W,
        table: &TripTable,
        filter: &Filter,
    ) -> io::Result<()> {
        let city = table.city;

        let (stats, elapsed) = timed(|| analytics::compute_time_stats(table, filter));
        self.time_stats(out, city, stats.as_ref(), elapsed)?;

        let (stats, elapsed) = timed(|| analytics::compute_station_stats(table));
        self.station_stats(out, city, stats.as_ref(), elapsed)?;

        let (stats, elapsed) = timed(|| analytics::compute_trip_duration_stats(table));
        self.duration_stats(out, city, stats.as_ref(), elapsed)?;

        let (stats, elapsed) = timed(|| analytics::compute_user_stats(table));
        self.user_stats(out, city, stats.as_ref(), elapsed)
    }

    pub fn time_stats<W: Write>(
        &self,
        out: &mut W,
        city: City,
        stats: Option<&TimeStats>,
        elapsed: Duration,
    ) -> io::Result<()> {
        self.header(
            out,
            format!("Calculating The Most Frequent Times of Travel for {city}..."),
        )?;
        match stats {
            None => writeln!(out, "{NO_DATA}")?,
            Some(s) => {
                if let Some(name) = s.popular_month.and_then(month_name) {
                    writeln!(out, "The most popular month for travel is: {name}")?;
                }
                if let Some(day) = s.popular_day {
                    writeln!(out, "The most popular day to travel is: {day}")?;
                }
                writeln!(
                    out,
                    "The most popular start time is: {}",
                    hour_label(s.popular_hour)
                )?;
            }
        }
        self.footer(out, elapsed)
    }

    pub fn station_stats<W: Write>(
        &self,
        out: &mut W,
        city: City,
        stats: Option<&StationStats>,
        elapsed: Duration,
    ) -> io::Result<()> {
        self.header(
            out,
            format!("Calculating The Most Popular Stations and Trip Info for {city}..."),
        )?;
        match stats {
            None => writeln!(out, "{NO_DATA}")?,
            Some(s) => {
                let start = s.popular_start.as_deref().unwrap_or(MISSING);
                let end = s.popular_end.as_deref().unwrap_or(MISSING);
                writeln!(out, "The most popular start station is: {start}")?;
                writeln!(out, "The most popular end station is: {end}")?;
                match &s.popular_trip {
                    Some(pair) => writeln!(
                        out,
                        "The most frequent combination of start and end stations is: {} (start) & {} (end), {} trips",
                        pair.start, pair.end, pair.trips
                    )?,
                    None => writeln!(
                        out,
                        "The most frequent combination of start and end stations is: {MISSING}"
                    )?,
                }
            }
        }
        self.footer(out, elapsed)
    }

    pub fn duration_stats<W: Write>(
        &self,
        out: &mut W,
        city: City,
        stats: Option<&DurationStats>,
        elapsed: Duration,
    ) -> io::Result<()> {
        self.header(out, format!("Calculating Trip Duration stats for {city}..."))?;
        match stats {
            None => writeln!(out, "{NO_DATA}")?,
            Some(DurationStats { minutes: None, .. }) => writeln!(out, "{NO_DURATIONS}")?,
            Some(DurationStats {
                minutes: Some(m), ..
            }) => {
                writeln!(out, "The total travel time was: {} minutes", m.total)?;
                writeln!(out, "The average trip duration was: {} minutes", m.mean)?;
                writeln!(
                    out,
                    "The shortest trip length was: {} minutes",
                    format_minutes(m.shortest)
                )?;
                writeln!(
                    out,
                    "The longest trip length was: {} minutes",
                    format_minutes(m.longest)
                )?;
            }
        }
        self.footer(out, elapsed)
    }

    pub fn user_stats<W: Write>(
        &self,
        out: &mut W,
        city: City,
        stats: Option<&UserStats>,
        elapsed: Duration,
    ) -> io::Result<()> {
        self.header(out, format!("Calculating User Stats for {city}..."))?;
        match stats {
            None => writeln!(out, "{NO_DATA}")?,
            Some(s) => {
                counts(out, "Counts of user types:", &s.user_types)?;
                if let Some(demo) = &s.demographics {
                    writeln!(out)?;
                    counts(out, "Counts of gender:", &demo.genders)?;
                    if let Some(years) = &demo.birth_years {
                        writeln!(out)?;
                        writeln!(
                            out,
                            "The earliest birth year in this data set is: {}",
                            years.earliest
                        )?;
                        writeln!(
                            out,
                            "The most recent birth year in this data set is: {}",
                            years.most_recent
                        )?;
                        writeln!(
                            out,
                            "The most common birth year in this data set is: {}",
                            years.most_common
                        )?;
                    }
                }
            }
        }
        self.footer(out, elapsed)
    }

    /// Print one page of raw trips, labelled with their source row index.
    pub fn trip_rows<W: Write>(&self, out: &mut W, city: City, rows: &[Trip]) -> io::Result<()> {
        if rows.is_empty() {
            return writeln!(out, "{NO_MORE_ROWS}");
        }
        let mut columns = vec![
            "",
            "Start Time",
            "End Time",
            "Trip Duration",
            "Start Station",
            "End Station",
            "User Type",
        ];
        if city.has_demographics() {
            columns.extend(["Gender", "Birth Year"]);
        }
        columns.extend(["month", "day_of_week", "hour"]);
        writeln!(
            out,
            "{}",
            style(columns.join(" | ")).dim().force_styling(self.styled)
        )?;

        for trip in rows {
            writeln!(out, "{}", row_cells(trip, city).join(" | "))?;
        }
        Ok(())
    }
}

fn counts<W: Write>(out: &mut W, title: &str, rows: &[ValueCount]) -> io::Result<()> {
    writeln!(out, "{title}")?;
    if rows.is_empty() {
        return writeln!(out, "  (none recorded)");
    }
    for row in rows {
        writeln!(out, "  {}: {}", row.value, row.count)?;
    }
    Ok(())
}

fn row_cells(trip: &Trip, city: City) -> Vec<String> {
    let missing = || MISSING.to_string();
    let mut cells = vec![
        trip.index.to_string(),
        trip.start_time.format("%Y-%m-%d %H:%M:%S").to_string(),
        trip.end_time.clone(),
        trip.duration_secs.map(format_number).unwrap_or_else(missing),
        trip.start_station.clone().unwrap_or_else(missing),
        trip.end_station.clone().unwrap_or_else(missing),
        trip.user_type.clone().unwrap_or_else(missing),
    ];
    if city.has_demographics() {
        cells.push(trip.gender.clone().unwrap_or_else(missing));
        cells.push(trip.birth_year.map(format_number).unwrap_or_else(missing));
    }
    cells.push(trip.month.to_string());
    cells.push(trip.weekday_name().to_string());
    cells.push(trip.hour.to_string());
    cells
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load_from_reader;
    use crate::model::Month;

    const CHICAGO_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
0,2017-01-02 08:10:00,2017-01-02 08:12:00,120,Canal St,Clark St,Subscriber,Male,1985.0
1,2017-01-09 09:30:00,2017-01-09 09:33:00,180,Canal St,Clark St,Customer,,
2,2017-02-07 08:05:00,2017-02-07 08:06:00,60,Clark St,Canal St,Subscriber,Female,1990.0
";

    const WASHINGTON_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
0,2017-04-03 07:00:00,2017-04-03 07:02:00,120.5,14th & V St,Lamont St,Registered
";

    fn render(csv: &str, city: City, filter: Filter) -> String {
        let table = load_from_reader(csv.as_bytes(), city, filter).unwrap();
        let mut out = Vec::new();
        Renderer::new(false)
            .full_report(&mut out, &table, &filter)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn chicago_all_reports_month_and_weekday() {
        let out = render(CHICAGO_CSV, City::Chicago, Filter::All);
        assert!(out.contains("Calculating The Most Frequent Times of Travel for Chicago..."));
        assert!(out.contains("The most popular month for travel is: January"));
        assert!(out.contains("The most popular day to travel is: Monday"));
        assert!(out.contains("The most popular start time is: 8:00"));
        assert!(out.contains("The total travel time was: 6 minutes"));
        assert!(out.contains("The average trip duration was: 2 minutes"));
        assert!(out.contains("The shortest trip length was: 1.0 minutes"));
        assert!(out.contains("The longest trip length was: 3.0 minutes"));
        assert!(out.contains("  Subscriber: 2"));
        assert!(out.contains("Counts of gender:"));
        assert!(out.contains("The earliest birth year in this data set is: 1985"));
        assert_eq!(out.matches("This took ").count(), 4);
    }

    #[test]
    fn sections_print_in_fixed_order() {
        let out = render(CHICAGO_CSV, City::Chicago, Filter::All);
        let time = out.find("Times of Travel").unwrap();
        let stations = out.find("Popular Stations").unwrap();
        let duration = out.find("Trip Duration stats").unwrap();
        let users = out.find("User Stats").unwrap();
        assert!(time < stations && stations < duration && duration < users);
    }

    #[test]
    fn month_filter_hides_popular_month() {
        let out = render(
            CHICAGO_CSV,
            City::Chicago,
            Filter::ByMonth(Month::January),
        );
        assert!(!out.contains("most popular month"));
        assert!(out.contains("most popular day"));
    }

    #[test]
    fn washington_omits_demographics() {
        let out = render(WASHINGTON_CSV, City::Washington, Filter::All);
        assert!(out.contains("Calculating User Stats for Washington..."));
        assert!(out.contains("  Registered: 1"));
        assert!(!out.contains("gender"));
        assert!(!out.contains("birth year"));
        assert!(out.contains("The shortest trip length was: 2.01 minutes"));
    }

    #[test]
    fn empty_table_reports_no_data_in_every_section() {
        let out = render(CHICAGO_CSV, City::Chicago, Filter::ByMonth(Month::May));
        assert_eq!(out.matches(NO_DATA).count(), 4);
        assert!(!out.contains("most popular"));
    }

    #[test]
    fn rows_without_durations_are_not_reported_as_empty() {
        let csv = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type
2017-04-03 07:00:00,x,,A,B,Registered
2017-04-04 07:00:00,x,,A,B,Casual
";
        let out = render(csv, City::Washington, Filter::All);
        let duration = out.find("Trip Duration stats").unwrap();
        let users = out.find("User Stats").unwrap();
        let section = &out[duration..users];
        assert!(section.contains(NO_DURATIONS));
        assert!(!section.contains(NO_DATA));
        assert!(!out.contains(NO_DATA));
    }

    #[test]
    fn blank_stations_render_as_missing() {
        let csv = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type
2017-04-03 07:00:00,x,60,,,Registered
2017-04-04 07:00:00,x,60,,,Registered
2017-04-05 07:00:00,x,60,A,,Registered
";
        let out = render(csv, City::Washington, Filter::All);
        assert!(out.contains("The most popular start station is: A\n"));
        assert!(out.contains("The most popular end station is: -\n"));
        assert!(out.contains("start and end stations is: -\n"));

        let table = load_from_reader(csv.as_bytes(), City::Washington, Filter::All).unwrap();
        let mut page = Vec::new();
        Renderer::new(false)
            .trip_rows(&mut page, City::Washington, table.rows(0, 1))
            .unwrap();
        let page = String::from_utf8(page).unwrap();
        assert_eq!(
            page.lines().nth(1),
            Some("0 | 2017-04-03 07:00:00 | x | 60 | - | - | Registered | 4 | Monday | 7")
        );
    }

    #[test]
    fn trip_rows_include_derived_columns() {
        let table = load_from_reader(CHICAGO_CSV.as_bytes(), City::Chicago, Filter::All).unwrap();
        let mut out = Vec::new();
        Renderer::new(false)
            .trip_rows(&mut out, City::Chicago, table.rows(0, 2))
            .unwrap();
        let out = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("Gender | Birth Year | month | day_of_week | hour"));
        assert_eq!(
            lines[1],
            "0 | 2017-01-02 08:10:00 | 2017-01-02 08:12:00 | 120 | Canal St | Clark St | Subscriber | Male | 1985 | 1 | Monday | 8"
        );
        assert!(lines[2].contains("| - | - |"));
    }

    #[test]
    fn empty_page_says_so() {
        let mut out = Vec::new();
        Renderer::new(false)
            .trip_rows(&mut out, City::Washington, &[])
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap().trim(), NO_MORE_ROWS);
    }

    #[test]
    fn minutes_formatting() {
        assert_eq!(format_minutes(1.0), "1.0");
        assert_eq!(format_minutes(1.67), "1.67");
        assert_eq!(format_minutes(-0.5), "-0.5");
    }
}
