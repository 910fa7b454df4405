use datafetcher::{
    schedules,
    util::{self, DEFAULT_OUTPUT_DIR},
};
use futures::future::join_all;
use log::{info, warn};
use models::{campus::Campus, quarter::Quarter};
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use reqwest::Client;
use std::{env, str::FromStr};

const USAGE: &str = "Usage: schedules <year> <quarter (A|W|Sp|S)>";

const HEADERS: [&str; 12] = [
    "Campus",
    "Year",
    "Quarter",
    "Course Name",
    "Seats",
    "SLN",
    "Section",
    "Type",
    "Days",
    "Time",
    "Building",
    "Room Number",
];

/// Orchestrates the scraping of one quarter's time schedules
#[tokio::main]
async fn main() {
    env_logger::init();

    let mut args = env::args().skip(1);
    let year: u16 = args
        .next()
        .expect(USAGE)
        .parse()
        .expect("Year must be a number");
    let quarter = Quarter::from_str(&args.next().expect(USAGE))
        .expect("Quarter must be one of A, W, Sp, S");

    let client = Client::new();

    // Download every department page of every campus in parallel
    let futures = Campus::all().into_iter().map(|campus| {
        let client = client.clone();
        async move {
            let base = schedules::quarter_url(campus, quarter, year);
            let index = match util::fetch_text(&client, &base).await {
                Ok(index) => index,
                Err(e) => {
                    // Quarters that are not published yet simply have no page
                    warn!("{}: {e}", campus.as_str());
                    return (campus, Vec::new());
                }
            };
            let links = schedules::department_links(&index, &base);
            info!("{}: {} department pages", campus.as_str(), links.len());

            let downloads = links.into_iter().map(|url| {
                let client = client.clone();
                async move { util::fetch_text(&client, &url).await }
            });

            let mut bodies = Vec::new();
            for result in join_all(downloads).await {
                match result {
                    Ok(body) => bodies.push(body),
                    Err(e) => warn!("{e}"),
                }
            }
            (campus, bodies)
        }
    });
    let downloaded: Vec<(Campus, Vec<String>)> = join_all(futures).await;

    // Do parsing in parallel
    let rows: Vec<_> = downloaded
        .into_par_iter()
        .flat_map(|(campus, bodies)| {
            bodies
                .into_par_iter()
                .flat_map(|body| schedules::parse_department(&body))
                .map(|row| (campus, row))
                .collect::<Vec<_>>()
        })
        .collect();
    info!("parsed {} meeting rows", rows.len());

    let output_file = format!("time_schedules_{}{year}.csv", quarter.code());
    let mut writer =
        util::create_csv_writer(&output_file, &HEADERS).expect("Failed to create CSV writer");
    let year = year.to_string();
    for (campus, row) in &rows {
        writer
            .write_record([
                campus.as_str(),
                year.as_str(),
                quarter.code(),
                row.course_name.as_str(),
                row.seats.as_str(),
                row.sln.as_str(),
                row.section.as_str(),
                row.kind.as_str(),
                row.days.as_str(),
                row.time.as_str(),
                row.building.as_str(),
                row.room.as_str(),
            ])
            .expect("Failed to write CSV row");
    }
    writer.flush().expect("Failed to flush CSV writer");
    info!("wrote {DEFAULT_OUTPUT_DIR}/{output_file}");
}
