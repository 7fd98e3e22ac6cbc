//! End-to-end service tests against the nullable clock and custody ledger.

use patron_custody::MintAuthority;
use patron_engine::EngineError;
use patron_nullables::{NullClock, NullCustody};
use patron_service::{PatronService, ServiceConfig, ServiceError};
use patron_types::{AccountAddress, Asset};

const DAY: u64 = 24 * 60 * 60;

fn supporter() -> AccountAddress {
    AccountAddress::new("ptrn_supporter")
}

fn creator() -> AccountAddress {
    AccountAddress::new("ptrn_creator")
}

fn setup() -> (NullCustody, NullClock) {
    let custody = NullCustody::new();
    custody.register_authority(Asset::Reward, MintAuthority::new("patron_mint"));
    custody.credit(Asset::Stable, &supporter(), 100_000_000);
    (custody, NullClock::new(1_000))
}

fn service<'a>(
    custody: &'a NullCustody,
    clock: &'a NullClock,
) -> PatronService<&'a NullCustody, &'a NullClock> {
    let service = PatronService::from_config(&ServiceConfig::default(), custody, clock)
        .expect("default config is valid");
    service.initialize_creator(&creator()).unwrap();
    service
}

#[test]
fn full_support_and_claim_lifecycle() {
    let (custody, clock) = setup();
    let service = service(&custody, &clock);

    let receipt = service
        .support_creator(&supporter(), &creator(), 10_000_000)
        .unwrap();
    assert_eq!(receipt.payout, 7_000_000);
    assert_eq!(receipt.staked_delta, 3_000_000);

    assert_eq!(custody.balance(Asset::Stable, &creator()), 7_000_000);
    assert_eq!(
        custody.balance(Asset::Stable, &AccountAddress::custody_for(&creator())),
        3_000_000
    );

    // No time has passed yet.
    let result = service.claim_rewards(&supporter(), &creator());
    assert!(matches!(
        result,
        Err(ServiceError::Engine(EngineError::NothingToClaim))
    ));

    clock.advance(30 * DAY);
    let claim = service.claim_rewards(&supporter(), &creator()).unwrap();
    assert_eq!(claim.elapsed_secs, 30 * DAY);
    assert_eq!(claim.supporter_share, 345);
    assert_eq!(claim.creator_share, 148);
    assert_eq!(custody.balance(Asset::Reward, &supporter()), 345);
    assert_eq!(custody.balance(Asset::Reward, &creator()), 148);

    // Identical windows mint identical rewards.
    clock.advance(30 * DAY);
    let second = service.claim_rewards(&supporter(), &creator()).unwrap();
    assert_eq!(second.supporter_share, 345);
    assert_eq!(custody.balance(Asset::Reward, &supporter()), 690);

    let record = service.creator(&creator()).unwrap();
    assert_eq!(record.total_support_amount, 7_000_000);
    assert_eq!(record.total_staked, 3_000_000);
    assert_eq!(record.accumulated_rewards, 296);
}

#[test]
fn repeat_support_accrues_on_combined_principal() {
    let (custody, clock) = setup();
    let service = service(&custody, &clock);

    service
        .support_creator(&supporter(), &creator(), 10_000_000)
        .unwrap();
    service
        .support_creator(&supporter(), &creator(), 5_000_000)
        .unwrap();

    let stake = service.stake(&supporter(), &creator()).unwrap();
    assert_eq!(stake.staked_amount, 4_500_000);

    let record = service.creator(&creator()).unwrap();
    assert_eq!(record.supporters, 1);
    assert_eq!(record.total_staked, 4_500_000);
}

#[test]
fn failed_mint_keeps_the_window_accruing() {
    let (custody, clock) = setup();
    let service = service(&custody, &clock);

    service
        .support_creator(&supporter(), &creator(), 10_000_000)
        .unwrap();

    clock.advance(30 * DAY);
    custody.fail_next_mint();
    assert!(service.claim_rewards(&supporter(), &creator()).is_err());
    assert_eq!(custody.balance(Asset::Reward, &supporter()), 0);

    // The failed claim did not advance the cursor; the next claim settles
    // the full span.
    clock.advance(30 * DAY);
    let claim = service.claim_rewards(&supporter(), &creator()).unwrap();
    assert_eq!(claim.elapsed_secs, 60 * DAY);
    assert_eq!(claim.supporter_share, 690);
    assert_eq!(claim.creator_share, 296);
}

#[test]
fn unstake_returns_principal_to_the_supporter() {
    let (custody, clock) = setup();
    let service = service(&custody, &clock);

    service
        .support_creator(&supporter(), &creator(), 10_000_000)
        .unwrap();

    let remaining = service.unstake(&supporter(), &creator(), 2_100_000).unwrap();
    assert_eq!(remaining, 900_000);
    assert_eq!(custody.balance(Asset::Stable, &supporter()), 92_100_000);

    let result = service.unstake(&supporter(), &creator(), 900_000);
    assert!(matches!(
        result,
        Err(ServiceError::Engine(EngineError::UnstakeTooLarge { .. }))
    ));
}

#[test]
fn initialize_is_once_only_through_the_service() {
    let (custody, clock) = setup();
    let service = service(&custody, &clock);

    let result = service.initialize(ServiceConfig::default().protocol);
    assert!(matches!(
        result,
        Err(ServiceError::Engine(EngineError::AlreadyInitialized))
    ));
}

#[test]
fn supporting_an_unregistered_creator_is_rejected() {
    let (custody, clock) = setup();
    let service = service(&custody, &clock);

    let unknown = AccountAddress::new("ptrn_nobody");
    let result = service.support_creator(&supporter(), &unknown, 10_000_000);
    assert!(matches!(
        result,
        Err(ServiceError::Engine(EngineError::CreatorNotFound(_)))
    ));
}

// The one test in this binary allowed to touch the global subscriber.
#[test]
fn logging_initializes_from_config() {
    let config = ServiceConfig {
        log_format: "json".to_string(),
        log_level: "debug".to_string(),
        ..ServiceConfig::default()
    };
    config.init_logging().expect("first initialization succeeds");
}

#[test]
fn protocol_parameters_load_from_toml() {
    let (custody, clock) = setup();
    let config = ServiceConfig::from_toml_str(
        r#"
        [protocol]
        price_per_impact = 100
        max_reward_multiplier = 150
        scaling_factor = 50
        apr = 2000
        supporter_reward_ratio = 50
        min_stake_amount = 1000000
        "#,
    )
    .unwrap();
    let service = PatronService::from_config(&config, &custody, &clock).unwrap();
    service.initialize_creator(&creator()).unwrap();

    let receipt = service
        .support_creator(&supporter(), &creator(), 10_000_000)
        .unwrap();
    assert_eq!(receipt.payout, 5_000_000);
    assert_eq!(receipt.staked_delta, 5_000_000);
}
