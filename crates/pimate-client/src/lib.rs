//! Client core for the PiMate home server.
//!
//! Provides:
//! - An HTTP transport abstraction with a reqwest implementation
//! - `MetricsPoller`: periodic `/system_info` reads published as snapshots
//! - `CommandDispatcher`: one-shot remote actions mapped to outcomes
//!
//! Both components are independent and share only the transport.

pub mod dispatcher;
pub mod endpoint;
pub mod poller;
pub mod transport;

pub use dispatcher::CommandDispatcher;
pub use endpoint::BaseUrl;
pub use poller::{MetricsPoller, PollerHandle};
pub use transport::{HttpResponse, ReqwestTransport, Transport};
