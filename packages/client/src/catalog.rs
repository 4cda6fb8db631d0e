//! Movie catalog sources.
//!
//! The deck pulls pages of candidate items from a [`CatalogSource`]. The real
//! source talks to TMDB; a built-in sample catalog stands in when no API key
//! is configured or the network is down.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

const TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";
const TMDB_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// Streaming services a catalog item can be tagged with.
pub const SERVICE_POOL: [&str; 7] = [
    "Netflix",
    "Disney+",
    "HBO Max",
    "Prime Video",
    "Hulu",
    "Paramount+",
    "Apple TV+",
];

/// One swipeable catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogItem {
    pub id: String,
    pub title: String,
    pub year: i32,
    pub poster_url: String,
    pub genres: Vec<String>,
    pub rating: f32,
    pub available_on: Vec<String>,
    pub synopsis: String,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}

/// A paged source of catalog items. Page numbers start at 1; an empty page
/// means the source is exhausted.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_page(&self, page: u32) -> Result<Vec<CatalogItem>, CatalogError>;
}

fn genre_name(id: u32) -> Option<&'static str> {
    let name = match id {
        28 => "Action",
        12 => "Adventure",
        16 => "Animation",
        35 => "Comedy",
        80 => "Crime",
        99 => "Documentary",
        18 => "Drama",
        10751 => "Family",
        14 => "Fantasy",
        36 => "History",
        27 => "Horror",
        10402 => "Music",
        9648 => "Mystery",
        10749 => "Romance",
        878 => "Sci-Fi",
        10770 => "TV Movie",
        53 => "Thriller",
        10752 => "War",
        37 => "Western",
        _ => return None,
    };
    Some(name)
}

/// TMDB does not expose streaming availability, so items get a stable tag
/// derived from their id: 1 to 3 services, the same on every fetch.
pub fn availability_tags(item_id: &str) -> Vec<String> {
    let hash: u32 = item_id
        .bytes()
        .fold(2166136261u32, |acc, b| (acc ^ b as u32).wrapping_mul(16777619));
    let count = 1 + (hash % 3) as usize;
    let start = (hash / 3) as usize % SERVICE_POOL.len();
    (0..count)
        .map(|i| SERVICE_POOL[(start + i * 2) % SERVICE_POOL.len()].to_string())
        .collect()
}

#[derive(Debug, Deserialize)]
struct TmdbMovie {
    id: u64,
    title: String,
    #[serde(default)]
    release_date: String,
    poster_path: Option<String>,
    #[serde(default)]
    genre_ids: Vec<u32>,
    vote_average: f32,
    #[serde(default)]
    overview: String,
}

#[derive(Debug, Deserialize)]
struct TmdbPage {
    results: Vec<TmdbMovie>,
}

/// Popular-movies feed from the TMDB HTTP API.
pub struct TmdbCatalog {
    http: reqwest::Client,
    api_key: String,
}

impl TmdbCatalog {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
        }
    }

    fn convert(movie: TmdbMovie) -> CatalogItem {
        let year = movie
            .release_date
            .split('-')
            .next()
            .and_then(|y| y.parse().ok())
            .unwrap_or(0);
        let genres = movie
            .genre_ids
            .iter()
            .filter_map(|&id| genre_name(id))
            .map(str::to_string)
            .collect();
        let id = movie.id.to_string();
        let poster_url = movie
            .poster_path
            .map(|p| format!("{TMDB_IMAGE_BASE_URL}{p}"))
            .unwrap_or_default();
        let synopsis = if movie.overview.is_empty() {
            "No synopsis available.".to_string()
        } else {
            movie.overview
        };
        CatalogItem {
            available_on: availability_tags(&id),
            id,
            title: movie.title,
            year,
            poster_url,
            genres,
            rating: (movie.vote_average * 10.0).round() / 10.0,
            synopsis,
        }
    }
}

#[async_trait]
impl CatalogSource for TmdbCatalog {
    async fn fetch_page(&self, page: u32) -> Result<Vec<CatalogItem>, CatalogError> {
        let url = format!(
            "{TMDB_BASE_URL}/movie/popular?api_key={}&page={page}&language=en-US",
            self.api_key
        );
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| CatalogError::Unavailable(e.to_string()))?;
        if !response.status().is_success() {
            return Err(CatalogError::Unavailable(format!(
                "TMDB returned {}",
                response.status()
            )));
        }
        let body: TmdbPage = response
            .json()
            .await
            .map_err(|e| CatalogError::Unavailable(e.to_string()))?;
        // Entries without posters are not swipeable.
        Ok(body
            .results
            .into_iter()
            .filter(|m| m.poster_path.is_some())
            .map(Self::convert)
            .collect())
    }
}

/// Built-in catalog used when TMDB is not reachable.
pub struct SampleCatalog;

impl SampleCatalog {
    fn items() -> Vec<CatalogItem> {
        fn item(
            id: &str,
            title: &str,
            year: i32,
            poster: &str,
            genres: &[&str],
            rating: f32,
            available_on: &[&str],
            synopsis: &str,
        ) -> CatalogItem {
            CatalogItem {
                id: id.to_string(),
                title: title.to_string(),
                year,
                poster_url: format!("{TMDB_IMAGE_BASE_URL}{poster}"),
                genres: genres.iter().map(|g| g.to_string()).collect(),
                rating,
                available_on: available_on.iter().map(|s| s.to_string()).collect(),
                synopsis: synopsis.to_string(),
            }
        }

        vec![
            item(
                "1",
                "The Shawshank Redemption",
                1994,
                "/q6y0Go1tsGEsmtFryDOJo3dEmqu.jpg",
                &["Drama"],
                9.3,
                &["Netflix", "Prime Video"],
                "Two imprisoned men bond over a number of years, finding solace and eventual redemption.",
            ),
            item(
                "2",
                "The Godfather",
                1972,
                "/3bhkrj58Vtu7enYsRolD1fZdja1.jpg",
                &["Crime", "Drama"],
                9.2,
                &["Paramount+", "Prime Video"],
                "The aging patriarch of an organized crime dynasty transfers control to his reluctant son.",
            ),
            item(
                "3",
                "The Dark Knight",
                2008,
                "/qJ2tW6WMUDux911r6m7haRef0WH.jpg",
                &["Action", "Crime", "Drama"],
                9.0,
                &["HBO Max", "Prime Video"],
                "Batman faces his greatest challenge as the Joker wreaks havoc on Gotham City.",
            ),
            item(
                "4",
                "Pulp Fiction",
                1994,
                "/d5iIlFn5s0ImszYzBPb8JPIfbXD.jpg",
                &["Crime", "Drama"],
                8.9,
                &["Netflix", "Hulu"],
                "The lives of two mob hitmen, a boxer, and a pair of diner bandits intertwine.",
            ),
            item(
                "5",
                "Inception",
                2010,
                "/9gk7adHYeDvHkCSEqAvQNLV5Uge.jpg",
                &["Action", "Sci-Fi", "Thriller"],
                8.8,
                &["HBO Max", "Netflix"],
                "A thief who steals corporate secrets through dream-sharing technology.",
            ),
            item(
                "6",
                "The Matrix",
                1999,
                "/f89U3ADr1oiB1s9GkdPOEpXUk5H.jpg",
                &["Action", "Sci-Fi"],
                8.7,
                &["HBO Max", "Prime Video"],
                "A computer hacker learns about the true nature of his reality.",
            ),
            item(
                "7",
                "Interstellar",
                2014,
                "/gEU2QniE6E77NI6lCU6MxlNBvIx.jpg",
                &["Adventure", "Drama", "Sci-Fi"],
                8.6,
                &["Paramount+", "Prime Video"],
                "A team of explorers travel through a wormhole in space to save humanity.",
            ),
            item(
                "8",
                "Parasite",
                2019,
                "/7IiTTgloJzvGI1TAYymCfbfl3vT.jpg",
                &["Comedy", "Drama", "Thriller"],
                8.6,
                &["Hulu", "Prime Video"],
                "Greed and class discrimination threaten the newly formed symbiotic relationship.",
            ),
            item(
                "9",
                "Spirited Away",
                2001,
                "/39wmItIWsg5sZMyRUHLkWBcuVCM.jpg",
                &["Animation", "Adventure", "Fantasy"],
                8.6,
                &["HBO Max", "Netflix"],
                "A girl enters a magical world where she must work to free her parents.",
            ),
            item(
                "10",
                "Whiplash",
                2014,
                "/7fn624j5lj3xTme2SgiLCeuedmO.jpg",
                &["Drama", "Music"],
                8.5,
                &["Netflix", "Prime Video"],
                "A young drummer faces a ruthless music instructor at a prestigious conservatory.",
            ),
            item(
                "11",
                "Coco",
                2017,
                "/gGEsBPAijhVUFoiNpgZXqRVWJt2.jpg",
                &["Animation", "Adventure", "Family"],
                8.4,
                &["Disney+"],
                "A young boy travels to the Land of the Dead to discover his family history.",
            ),
            item(
                "12",
                "Mad Max: Fury Road",
                2015,
                "/hA2ple9q4qnwxp3hKVNhroipsir.jpg",
                &["Action", "Adventure", "Sci-Fi"],
                8.1,
                &["HBO Max", "Prime Video"],
                "A woman rebels against a tyrannical ruler in postapocalyptic Australia.",
            ),
            item(
                "13",
                "Knives Out",
                2019,
                "/pThyQovXQrw2m0s9x82twj48Jq4.jpg",
                &["Comedy", "Crime", "Mystery"],
                7.9,
                &["Netflix", "Prime Video"],
                "A detective investigates the death of a patriarch of an eccentric family.",
            ),
            item(
                "14",
                "Arrival",
                2016,
                "/x2FJsf1ElAgr63Y3PNPtJrcmpoe.jpg",
                &["Drama", "Sci-Fi"],
                7.9,
                &["Paramount+", "Prime Video"],
                "A linguist works with the military to communicate with alien visitors.",
            ),
            item(
                "15",
                "Spider-Man: Into the Spider-Verse",
                2018,
                "/iiZZdoQBEYBv6id8su7ImL0oCbD.jpg",
                &["Action", "Adventure", "Animation"],
                8.4,
                &["Netflix", "Prime Video"],
                "Teen Miles Morales teams up with Spider-People from other dimensions.",
            ),
            item(
                "16",
                "Encanto",
                2021,
                "/4j0PNHkMr5ax3IA8tjtxcmPU3QT.jpg",
                &["Animation", "Comedy", "Family", "Fantasy"],
                7.2,
                &["Disney+"],
                "A Colombian girl struggles as the only member of her family without magical powers.",
            ),
        ]
    }
}

#[async_trait]
impl CatalogSource for SampleCatalog {
    async fn fetch_page(&self, page: u32) -> Result<Vec<CatalogItem>, CatalogError> {
        if page <= 1 {
            Ok(Self::items())
        } else {
            Ok(Vec::new())
        }
    }
}

/// Uses the primary source and drops to the sample catalog when it fails.
pub struct FallbackCatalog<P> {
    primary: P,
    sample: SampleCatalog,
}

impl<P: CatalogSource> FallbackCatalog<P> {
    pub fn new(primary: P) -> Self {
        Self {
            primary,
            sample: SampleCatalog,
        }
    }
}

#[async_trait]
impl<P: CatalogSource> CatalogSource for FallbackCatalog<P> {
    async fn fetch_page(&self, page: u32) -> Result<Vec<CatalogItem>, CatalogError> {
        match self.primary.fetch_page(page).await {
            Ok(items) => Ok(items),
            Err(error) => {
                warn!(%error, page, "primary catalog failed, using sample data");
                self.sample.fetch_page(page).await
            }
        }
    }
}
