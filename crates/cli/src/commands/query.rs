use std::sync::Arc;

use anyhow::Result;
use serde::Serialize;
use welf_core::{LatLon, ResourceFilter, StoryCategory, StoryQuery, parse_impact_filter};
use welf_geo::{FlatPoint, Vec3, project_2d_coord, project_coord};
use welf_prices::{PriceClient, PriceConfig, format_percentage, format_usd};
use welf_service::{ImpactService, ResourceService, StoryService};
use welf_storage::FixtureStore;

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn fixture() -> Result<Arc<FixtureStore>> {
    Ok(Arc::new(FixtureStore::load()?))
}

pub(crate) async fn stories(category: Option<StoryCategory>, page: usize, limit: usize) -> Result<()> {
    let query = StoryQuery::new(category, page, limit)?;
    let page = StoryService::new(fixture()?).list_stories(&query).await?;
    print_json(&page)
}

pub(crate) async fn markers(category: Option<&str>) -> Result<()> {
    let markers = ImpactService::new(fixture()?).list_markers(parse_impact_filter(category)?).await?;
    print_json(&markers)
}

#[derive(Serialize)]
struct Projection {
    globe: Vec3,
    flat: FlatPoint,
}

pub(crate) fn project(lat: f64, lon: f64, radius: f64) -> Result<()> {
    if !(radius.is_finite() && radius > 0.0) {
        anyhow::bail!("radius must be a positive number, got {radius}");
    }
    let coord = LatLon::new(lat, lon)?;
    print_json(&Projection { globe: project_coord(coord, radius), flat: project_2d_coord(coord) })
}

pub(crate) async fn resources(resource_type: Option<&str>, level: Option<&str>) -> Result<()> {
    let filter = ResourceFilter::parse(resource_type, level)?;
    let resources = ResourceService::new(fixture()?).list_resources(filter).await?;
    print_json(&resources)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PriceLine {
    symbol: String,
    price: String,
    change_24h: String,
}

pub(crate) async fn prices() -> Result<()> {
    let client = PriceClient::from_config(&PriceConfig::from_env())?;
    let lines: Vec<PriceLine> = client
        .prices_or_empty()
        .await
        .into_iter()
        .map(|p| PriceLine {
            symbol: p.symbol,
            price: format_usd(p.current_price),
            change_24h: format_percentage(p.price_change_24h_percentage),
        })
        .collect();
    print_json(&lines)
}
