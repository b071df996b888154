use structopt::StructOpt;
use treasury_threshold_sig::encoding::{g1_to_onchain, ContractArgs};
use treasury_threshold_sig::logging::init_tracing;
use treasury_threshold_sig::{
    aggregate_public_keys, aggregate_signatures, Address, Agent, Settings, TransferMessage, U256,
};

use std::error::Error;

#[derive(StructOpt)]
struct Opt {
    #[structopt(long, help = "recipient address, 0x-prefixed")]
    recipient: Address,
    #[structopt(long, default_value = "0", help = "wallet nonce of the transfer")]
    nonce: u64,
    #[structopt(long, default_value = "risk,liquidity", use_delimiter = true, help = "signing agents")]
    agents: Vec<Agent>,
    #[structopt(long, help = "tracing filter, defaults to RUST_LOG")]
    log: Option<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let opt = Opt::from_args();
    init_tracing(opt.log.as_deref());

    let settings = Settings::from_env()?;
    let ring = settings.key_ring()?;
    let msg = TransferMessage::new(opt.recipient, settings.amount()?, U256::from_u64(opt.nonce));

    let signatures = opt
        .agents
        .iter()
        .map(|agent| ring.sign_transfer(*agent, &msg))
        .collect::<Result<Vec<_>, _>>()?;
    let pubkeys = opt.agents.iter().map(|agent| *ring.pubkey(*agent)).collect::<Vec<_>>();

    let group_sig = aggregate_signatures(&signatures, settings.threshold)?;
    let group_key = aggregate_public_keys(&pubkeys, settings.threshold)?;
    let message_point = treasury_bn254::hash_to_curve(ring.dst(), &msg.encode())?;

    if !group_sig.verify_hashed(&message_point, &group_key) {
        return Err("aggregate signature does not verify".into());
    }

    let args = ContractArgs::new(&group_key, &message_point, &group_sig);
    println!("{}", serde_json::to_string_pretty(&args)?);
    println!("0x{}", hex::encode(g1_to_onchain(group_sig.inner())));
    Ok(())
}
