use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/weather-detail")]
    WeatherDetail,
}

#[cfg(test)]
mod tests {
    use super::Route;
    use yew_router::Routable;

    #[test]
    fn recognizes_both_paths() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(
            Route::recognize("/weather-detail"),
            Some(Route::WeatherDetail)
        );
    }

    #[test]
    fn named_navigation_matches_the_literal_path() {
        assert_eq!(Route::WeatherDetail.to_path(), "/weather-detail");
        assert_eq!(
            Route::recognize(&Route::WeatherDetail.to_path()),
            Some(Route::WeatherDetail)
        );
    }

    #[test]
    fn table_has_exactly_two_distinct_entries() {
        let routes = Route::routes();
        assert_eq!(routes.len(), 2);
        assert!(routes.contains(&"/"));
        assert!(routes.contains(&"/weather-detail"));
    }

    #[test]
    fn unknown_paths_are_left_to_the_router_fallback() {
        assert_eq!(Route::recognize("/nope"), None);
        assert_eq!(Route::not_found_route(), None);
    }
}
