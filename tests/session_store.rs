// Integration tests for the navigation session store
use dreamscape_nav::session::NavigationPhase;
use dreamscape_nav::{
    Coordinate, MockCatalogGenerator, NavigationSession, NavigationSessionStore, Route,
    RouteGenerator,
};

fn catalog() -> Vec<Route> {
    MockCatalogGenerator::new().generate(
        &Coordinate::new(37.78825, -122.4324),
        &Coordinate::new(37.781, -122.411),
    )
}

#[test]
fn test_initial_state() {
    let store = NavigationSessionStore::new();
    let session = store.snapshot();

    assert!(session.origin.is_none());
    assert!(session.destination.is_none());
    assert!(session.available_routes.is_empty());
    assert!(session.selected_route.is_none());
    assert!(!session.is_navigating);
    assert_eq!(session, NavigationSession::default());
}

#[test]
fn test_start_stop_round_trip_clears_route_data() {
    let store = NavigationSessionStore::new();
    let routes = catalog();

    store.start_navigation();
    store.set_routes(routes.clone());
    store.select_route(Some(routes[1].clone()));
    store.stop_navigation();

    let session = store.snapshot();
    assert!(!session.is_navigating);
    assert!(session.selected_route.is_none());
    assert!(session.available_routes.is_empty());
}

#[test]
fn test_stop_is_idempotent() {
    let store = NavigationSessionStore::new();
    store.set_origin(Some(Coordinate::new(1.0, 2.0)));
    store.set_routes(catalog());
    store.start_navigation();

    store.stop_navigation();
    let once = store.snapshot();
    store.stop_navigation();
    let twice = store.snapshot();

    assert_eq!(once, twice);
}

#[test]
fn test_select_and_start_then_stop_keeps_endpoints() {
    let store = NavigationSessionStore::new();
    let origin = Coordinate::new(37.7749, -122.4194);
    let destination = Coordinate::new(37.7849, -122.4294).with_name("Test");
    store.set_origin(Some(origin.clone()));
    store.set_destination(Some(destination.clone()));

    assert_eq!(store.phase(), NavigationPhase::Idle);
    let routes = catalog();
    assert_eq!(routes.len(), 3);

    store.set_routes(routes.clone());
    store.select_route(Some(routes[0].clone()));
    store.start_navigation();

    assert!(store.is_navigating());
    assert_eq!(store.selected_route(), Some(routes[0].clone()));
    assert!(store.snapshot().selection_in_catalog());

    store.stop_navigation();

    let session = store.snapshot();
    assert!(!session.is_navigating);
    assert!(session.selected_route.is_none());
    assert!(session.available_routes.is_empty());
    assert_eq!(session.origin, Some(origin));
    assert_eq!(session.destination, Some(destination));
}

#[test]
fn test_phase_cycles() {
    let store = NavigationSessionStore::new();
    let routes = catalog();

    for route in routes {
        store.start_navigation_with(route.clone());
        assert_eq!(store.phase(), NavigationPhase::Navigating);
        assert_eq!(store.selected_route().map(|r| r.id), Some(route.id));

        store.stop_navigation();
        assert_eq!(store.phase(), NavigationPhase::Idle);
    }
}

#[test]
fn test_readers_on_other_threads_see_completed_writes() {
    let store = NavigationSessionStore::new();
    let routes = catalog();

    let writer = {
        let store = store.clone();
        let routes = routes.clone();
        std::thread::spawn(move || {
            for _ in 0..500 {
                store.start_navigation_with(routes[0].clone());
                store.stop_navigation();
            }
        })
    };

    for _ in 0..500 {
        let session = store.snapshot();
        if session.is_navigating {
            assert!(session.selected_route.is_some());
        } else {
            assert!(session.selected_route.is_none());
            assert!(session.available_routes.is_empty());
        }
    }

    writer.join().unwrap();
    assert!(!store.is_navigating());
}
