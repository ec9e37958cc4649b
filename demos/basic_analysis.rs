//! Example: Full analysis of one option contract
//!
//! Run with: cargo run --example basic_analysis

use vol_edge::prelude::*;

fn main() {
    // Contract parameters
    let spot = 100.0;
    let strike = 100.0;
    let time = 0.5; // 6 months
    let rate = 0.05; // 5% risk-free rate
    let vol = 0.20; // 20% implied volatility

    let snapshot = MarketSnapshot::new(spot, strike, time, rate, vol, OptionType::Call)
        .expect("valid inputs");

    println!("=== Black-Scholes Pricing ===\n");
    println!("Spot:     ${:.2}", spot);
    println!("Strike:   ${:.2}", strike);
    println!("Time:     {:.2} years", time);
    println!("Rate:     {:.1}%", rate * 100.0);
    println!("Vol:      {:.1}%\n", vol * 100.0);

    let (fair_value, greeks) = price_and_greeks(&snapshot).expect("pricing");
    println!("Call Price: ${:.4}", fair_value);

    let put = MarketSnapshot::new(spot, strike, time, rate, vol, OptionType::Put).unwrap();
    let put_price = bs_price(&put).expect("pricing");
    println!("Put Price:  ${:.4}", put_price);

    // Verify put-call parity: C - P = S - K*e^(-rT)
    let parity_lhs = fair_value - put_price;
    let parity_rhs = spot - strike * (-rate * time).exp();
    println!("\nPut-Call Parity Check:");
    println!("  C - P = {:.6}", parity_lhs);
    println!("  S - K*e^(-rT) = {:.6}", parity_rhs);

    println!("\n=== Greeks (Call) ===\n");
    println!("Delta:  {:.4}", greeks.delta);
    println!("Gamma:  {:.4}", greeks.gamma);
    println!("Vega:   {:.4} (per 1% vol)", greeks.vega);
    println!("Theta:  {:.4} (per day)", greeks.theta);
    println!("Rho:    {:.4} (per 1% rate)", greeks.rho);

    println!("\n=== Monte Carlo Cross-Check ===\n");
    let sim = simulate(&snapshot, 100_000, Some(42)).expect("simulation");
    println!("Paths:        {}", sim.paths);
    println!("MC Price:     ${:.4}", sim.mean_payoff);
    println!("Std Error:    {:.4}", sim.std_error);
    println!(
        "95% CI:       [{:.4}, {:.4}]",
        sim.confidence_interval.0, sim.confidence_interval.1
    );
    println!("P(ITM):       {:.1}%", sim.prob_itm * 100.0);

    println!("\n=== Volatility Signal ===\n");
    let closes: Vec<f64> = (0..60)
        .map(|i| 100.0 * (1.0 + 0.004 * (i as f64 * 0.9).sin()))
        .collect();
    let hv = historical_volatility(&closes, TRADING_DAYS_PER_YEAR).expect("history");
    println!("Historical Vol: {:.1}%", hv * 100.0);
    println!("Implied Vol:    {:.1}%", vol * 100.0);

    let market_price = 7.10; // what the market is charging
    let report = MispricingDetector::new()
        .detect(vol, hv, fair_value, market_price)
        .expect("detection");
    println!("Spread:         {:+.1} vol points", report.vol.spread * 100.0);
    println!("Regime:         {}", report.vol.regime.label());
    println!(
        "Model vs market: {:+.1}% (advisory)",
        report.price_divergence * 100.0
    );

    println!("\n=== Smile ===\n");
    let curve = build_smile(&[(90.0, 0.28), (100.0, 0.22), (110.0, 0.25)]).expect("smile");
    for (strike, iv) in curve.points() {
        println!("  K={:>5.1}  IV={:.1}%", strike, iv * 100.0);
    }
}
