use crate::macros::auto_increment;
use crate::params::Params;
use crate::response::Envelope;

#[derive(Debug, Clone, Copy)]
pub(crate) struct RequestTransaction {
    pub(crate) client_transaction_id: u32,
    pub(crate) client_id: u32,
}

impl RequestTransaction {
    pub(crate) fn new(client_id: u32) -> Self {
        Self {
            client_transaction_id: auto_increment!(),
            client_id,
        }
    }

    pub(crate) fn add_to(self, params: &mut Params) {
        params.insert("ClientID", self.client_id);
        params.insert("ClientTransactionID", self.client_transaction_id);
    }

    pub(crate) fn check_response(self, response: &Envelope) {
        tracing::debug!(
            server_transaction_id = response.server_transaction_id,
            "Received response",
        );

        match response.client_transaction_id {
            Some(received_client_transaction_id)
                if received_client_transaction_id != self.client_transaction_id =>
            {
                tracing::warn!(
                    sent = self.client_transaction_id,
                    received = received_client_transaction_id,
                    "ClientTransactionID mismatch",
                );
            }
            _ => {}
        }
    }
}
