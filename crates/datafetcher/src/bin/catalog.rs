use datafetcher::{
    catalog,
    util::{self, DEFAULT_OUTPUT_DIR},
};
use futures::future::join_all;
use log::{info, warn};
use models::campus::Campus;
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use reqwest::Client;

/// Output file name
const OUTPUT_FILE: &str = "courses.csv";

const HEADERS: [&str; 11] = [
    "Campus",
    "Department",
    "Course Number",
    "Course Name",
    "Credits",
    "Areas of Knowledge",
    "Quarters Offered",
    "Offered with",
    "Prerequisites",
    "Co-Requisites",
    "Description",
];

/// Orchestrates the scraping of all campus course catalogs
#[tokio::main]
async fn main() {
    env_logger::init();

    let client = Client::new();

    // Download every department page of every campus in parallel
    let futures = Campus::all().into_iter().map(|campus| {
        let client = client.clone();
        async move {
            let index = util::fetch_text(&client, campus.catalog_url())
                .await
                .expect("Failed to fetch catalog index");
            let pages = catalog::department_pages(&index);
            info!("{}: {} department pages", campus.as_str(), pages.len());

            let downloads = pages.into_iter().map(|page| {
                let client = client.clone();
                async move {
                    let url = format!("{}{page}", campus.catalog_url());
                    util::fetch_text(&client, &url).await
                }
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
    let records: Vec<_> = downloaded
        .into_par_iter()
        .flat_map(|(campus, bodies)| {
            bodies
                .into_par_iter()
                .flat_map(move |body| catalog::parse_department(&body, campus))
                .collect::<Vec<_>>()
        })
        .collect();
    info!("parsed {} courses", records.len());

    let mut writer =
        util::create_csv_writer(OUTPUT_FILE, &HEADERS).expect("Failed to create CSV writer");
    for record in &records {
        let offered = record.offered.to_string();
        writer
            .write_record([
                record.campus.as_str(),
                record.department.as_str(),
                record.number.as_str(),
                record.name.as_str(),
                record.credits.as_str(),
                record.areas.as_str(),
                offered.as_str(),
                record.jointly.as_str(),
                record.prerequisites.as_str(),
                record.corequisites.as_str(),
                record.description.as_str(),
            ])
            .expect("Failed to write CSV row");
    }
    writer.flush().expect("Failed to flush CSV writer");
    info!("wrote {DEFAULT_OUTPUT_DIR}/{OUTPUT_FILE}");
}
