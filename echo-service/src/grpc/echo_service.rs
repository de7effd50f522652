use crate::grpc::proto::{echo_server::Echo, EchoReply, EchoRequest};
use crate::startup::AppState;
use tonic::{Request, Response, Status};

pub struct EchoGrpcService {
    state: AppState,
}

impl EchoGrpcService {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

#[tonic::async_trait]
impl Echo for EchoGrpcService {
    async fn echo(&self, request: Request<EchoRequest>) -> Result<Response<EchoReply>, Status> {
        let req = request.into_inner();
        tracing::info!(msg = %req.msg, "Received echo request");

        let mut msg = req.msg;
        msg.push_str(self.state.config.suffix());

        Ok(Response::new(EchoReply {
            msg,
            unixtime: self.state.clock.now(),
        }))
    }
}
