use crate::network::interface::NetworkAdapter;

/// Access to the local machine's network configuration.
pub trait SystemRepository {
    fn get_network_adapters(&self) -> anyhow::Result<Vec<NetworkAdapter>>;
}
