use crate::common::*;

#[derive(Debug, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[doc = "Socket address the HTTP listener binds to"]
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr: String = format!("{}:{}", self.host, self.port);
        addr.parse::<SocketAddr>().with_context(|| {
            format!(
                "[ServerConfig->socket_addr] Invalid bind address '{}'",
                addr
            )
        })
    }
}
