mod envelope;
pub use envelope::{Envelope, RemoteFailure};

mod remote_access;
pub use remote_access::RemoteAccess;

mod transport;
pub use transport::{ApiRequest, HttpTransport, Method, Transport, TransportError};
