use graf_search::{from_csv, heuristic_from_csv, Graph, Heuristic, NodeMap, Strategy, Weight, Zero};

const MAP: &str = include_str!("../data/romania.csv");
const TO_BUCHAREST: &str = include_str!("../data/romania-bucharest.csv");

fn romania() -> (Graph, NodeMap<Weight>) {
    let g = from_csv(MAP).unwrap();
    let h = heuristic_from_csv(&g, TO_BUCHAREST).unwrap();
    (g, h)
}

fn route(g: &Graph, strategy: Strategy, from: &str, to: &str, h: &dyn Heuristic) -> Vec<String> {
    let path = g
        .find(strategy, &from.to_string(), &to.to_string(), Some(h))
        .unwrap()
        .unwrap();
    assert!(g.is_simple_walk(&path));
    g.labels_of(&path).into_iter().cloned().collect()
}

fn cost(g: &Graph, labels: &[String]) -> Weight {
    let path: Vec<_> = labels.iter().map(|l| g.node(l).unwrap()).collect();
    g.path_cost(&path).unwrap()
}

#[test]
fn map_is_symmetric() {
    let (g, _) = romania();
    assert_eq!(g.len(), 20);
    assert!(g.is_symmetric());
}

#[test]
fn sibiu_to_bucharest() {
    let (g, h) = romania();
    let run = |s| route(&g, s, "Sibiu", "Bucharest", &h);

    assert_eq!(run(Strategy::BreadthFirst), ["Sibiu", "Fagaras", "Bucharest"]);
    assert_eq!(
        run(Strategy::DepthFirst),
        [
            "Sibiu", "Arad", "Timisoara", "Lugoj", "Mehedia", "Drobita", "Craiova", "Pitesti",
            "Bucharest"
        ]
    );

    let ucs = run(Strategy::UniformCost);
    assert_eq!(ucs, ["Sibiu", "RM", "Pitesti", "Bucharest"]);
    assert_eq!(cost(&g, &ucs), 278.0);

    assert_eq!(run(Strategy::AStar), ucs);

    let greedy = run(Strategy::GreedyBestFirst);
    assert_eq!(greedy, ["Sibiu", "Fagaras", "Bucharest"]);
    assert_eq!(cost(&g, &greedy), 310.0);

    assert_eq!(run(Strategy::Bidirectional), ["Sibiu", "Fagaras", "Bucharest"]);
}

#[test]
fn arad_to_bucharest_is_optimal() {
    let (g, h) = romania();
    let astar = route(&g, Strategy::AStar, "Arad", "Bucharest", &h);
    assert_eq!(astar, ["Arad", "Sibiu", "RM", "Pitesti", "Bucharest"]);
    assert_eq!(cost(&g, &astar), 418.0);

    let ucs = route(&g, Strategy::UniformCost, "Arad", "Bucharest", &Zero);
    assert_eq!(ucs, astar);
    assert_eq!(route(&g, Strategy::AStar, "Arad", "Bucharest", &Zero), ucs);
}

#[test]
fn every_strategy_reaches_every_city() {
    let (g, _) = romania();
    for strategy in Strategy::ALL {
        for from in g.nodes() {
            for to in g.nodes() {
                let path = strategy.search(&g, from, to, Some(&Zero)).unwrap().unwrap();
                assert!(g.is_simple_walk(&path), "{strategy} {path:?}");
                assert_eq!(path.first(), Some(&from));
                assert_eq!(path.last(), Some(&to));
            }
        }
    }
}

#[test]
fn unknown_city() {
    let (g, h) = romania();
    let err = g
        .find(Strategy::AStar, &"Arad".to_string(), &"Atlantis".to_string(), Some(&h))
        .unwrap_err();
    assert_eq!(err, graf_search::Error::UnknownNode("\"Atlantis\"".to_string()));
}

#[test]
fn heuristic_for_another_goal_is_reported() {
    let (g, _) = romania();
    let partial = heuristic_from_csv(&g, "Sibiu,253\nFagaras,176\n").unwrap();
    let err = g
        .find(Strategy::GreedyBestFirst, &"Sibiu".to_string(), &"Bucharest".to_string(), Some(&partial))
        .unwrap_err();
    assert!(matches!(err, graf_search::Error::MissingHeuristic(_)));
}
