use anyhow::Context;
use riskbench::{
    AppConfig, DrawdownAnalyzer, MetricsReport, RatioCalculator, RegressionEstimator,
    ReturnsInput, SvgFitRenderer,
};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let returns_path = args
        .next()
        .context("Usage: riskbench <returns.json> [config.toml]")?;
    let config = match args.next() {
        Some(path) => AppConfig::load_from_file(path)?,
        None => AppConfig::default(),
    };

    let contents = std::fs::read_to_string(&returns_path)
        .with_context(|| format!("Failed to read {}", returns_path))?;
    let input: ReturnsInput =
        serde_json::from_str(&contents).context("Failed to parse returns JSON")?;

    let regression = if config.render.render {
        let renderer = SvgFitRenderer::new(&config.render.output_path);
        RegressionEstimator::estimate_and_render(&input.strategy, &input.market, &renderer)?
    } else {
        RegressionEstimator::estimate(&input.strategy, &input.market)?
    };

    let calculator = RatioCalculator::new(
        config.metrics.risk_free_rate,
        config.metrics.annualization_factor,
    );
    let ratios = calculator.calculate(&input.strategy, &input.market)?;
    let tail_risk = DrawdownAnalyzer::analyze(&input.strategy, &input.market)?;

    let report = MetricsReport {
        regression,
        ratios,
        tail_risk,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
