use tabled::Table;

use crate::{
    build_search,
    config::Settings,
    error,
    error::SearchError,
    success,
    types::ListingTableRow,
    utils, warning,
};

pub async fn search(genre: String, date: Option<String>) {
    let date = match utils::parse_list_date(date) {
        Ok(date) => date.format("%Y-%m-%d").to_string(),
        Err(e) => error!("{}", e),
    };

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => error!("Cannot load configuration: {}", e),
    };
    let pipeline = build_search(&settings);

    let pb = super::spinner(&format!("Searching listings for {} on {}...", genre, date));
    let result = pipeline.search(&date, &genre).await;
    pb.finish_and_clear();

    match result {
        Ok(listings) if listings.is_empty() => {
            warning!("The marketplace has no listings for this book right now.")
        }
        Ok(listings) => {
            let rows: Vec<ListingTableRow> = listings.iter().map(ListingTableRow::from).collect();
            println!("{}", Table::new(rows));
            success!("Found {} listings.", listings.len());
        }
        Err(SearchError::NotFound) => {
            warning!("No bestseller found for list {} on {}.", genre, date)
        }
        Err(e) => error!("Search failed: {}", e),
    }
}
