use peoplegraph::{
    cosine, pearson, Candidate, MemoryGraph, Metric, RankConfig, RecommendConfig,
    RecommendError, Recommender, SimilarityError,
};

#[test]
fn metric_misuse_is_a_distinguishable_error() {
    let empty: [f64; 0] = [];
    assert!(matches!(
        pearson(&empty, &empty),
        Err(SimilarityError::EmptyInput)
    ));
    assert!(matches!(
        pearson(&[1.0, 2.0], &[1.0, 2.0, 3.0]),
        Err(SimilarityError::LengthMismatch { left: 2, right: 3 })
    ));
    assert!(matches!(
        cosine(&[0.0, 0.0], &[1.0, 1.0]),
        Err(SimilarityError::ZeroNorm)
    ));
}

#[test]
fn degenerate_metrics_never_leak_nan() {
    let score = pearson(&[5.0, 5.0, 5.0], &[1.0, 2.0, 3.0]).expect("valid input");
    assert_eq!(score, 0.0);
    assert!(score.is_finite());
}

#[test]
fn ranker_drops_rather_than_errors_on_bad_candidates() {
    let target = [1.0, 2.0, 3.0];
    let candidates = vec![
        Candidate {
            id: 1_i64,
            vector: None,
            meta: (),
        },
        Candidate {
            id: 2,
            vector: Some(vec![]),
            meta: (),
        },
        Candidate {
            id: 3,
            vector: Some(vec![1.0, 2.0]),
            meta: (),
        },
        Candidate {
            id: 4,
            vector: Some(vec![f64::NAN, 1.0, 2.0]),
            meta: (),
        },
        Candidate {
            id: 5,
            vector: Some(vec![2.0, 4.0, 6.0]),
            meta: (),
        },
    ];

    let ranked = peoplegraph::rank(&target, candidates, &RankConfig::new(Metric::Pearson))
        .expect("valid config");
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].id, 5);
}

#[tokio::test]
async fn invalid_limits_fail_fast_across_the_engine() {
    let graph = MemoryGraph::new();
    graph.add_user(1, Some("Ada"));
    let engine = Recommender::new(graph, RecommendConfig::default()).expect("valid config");

    for err in [
        engine.recommend_friends(1, 0).await.unwrap_err(),
        engine.people_you_may_know(1, 0).await.unwrap_err(),
        engine.recommend_jobs(1, 0).await.unwrap_err(),
    ] {
        match err {
            RecommendError::InvalidConfig(msg) => assert!(msg.contains("limit")),
            other => panic!("unexpected error: {other}"),
        }
    }
}

#[test]
fn invalid_engine_config_fails_at_construction() {
    let result = Recommender::new(
        MemoryGraph::new(),
        RecommendConfig {
            candidate_pool: 0,
            ..Default::default()
        },
    );
    assert!(matches!(result, Err(RecommendError::InvalidConfig(_))));
}

#[tokio::test]
async fn missing_users_are_not_errors() -> Result<(), RecommendError> {
    let engine =
        Recommender::new(MemoryGraph::new(), RecommendConfig::default()).expect("valid config");

    assert!(engine.recommend_friends(404, 10).await?.is_none());
    assert!(engine.people_you_may_know(404, 10).await?.is_empty());
    assert!(engine.recommend_jobs(404, 10).await?.is_empty());
    assert_eq!(engine.friend_counts(404).await?.direct, 0);
    assert!(engine.shortest_path(404, 405).await?.is_none());
    Ok(())
}
