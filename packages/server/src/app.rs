//! Dependency wiring.
//!
//! Order: clock and stores, message pusher, use cases, dispatcher, server.

use std::sync::Arc;

use codecouncil_shared::time::{Clock, SystemClock};

use crate::{
    config::ServerConfig,
    domain::{ClientRegistry, ConnectionIdFactory, LlmGateway, MessagePusher, RoomRepository},
    infrastructure::{
        llm::build_gateway,
        message_pusher::WebSocketMessagePusher,
        repository::{InMemoryClientRegistry, InMemoryRoomRepository},
    },
    ui::{RelayDispatcher, RelayUseCases, Server, state::AppState},
    usecase::{
        AnalyzeCodeUseCase, ConnectClientUseCase, CreateFileUseCase, DeleteFileUseCase,
        DisconnectClientUseCase, GenerateDocsUseCase, GetRoomDetailUseCase, GetRoomsUseCase,
        JoinRoomUseCase, RoomBroadcaster, SaveSnapshotUseCase, SendMessageUseCase,
        UpdateFileUseCase,
    },
};

/// Build the server described by `config` with the system clock.
pub fn build_server(config: &ServerConfig) -> Server {
    build_server_with(config, Arc::new(SystemClock), build_gateway(&config.llm))
}

/// Build the server around an explicit clock and LLM gateway.
pub fn build_server_with(
    config: &ServerConfig,
    clock: Arc<dyn Clock>,
    gateway: Arc<dyn LlmGateway>,
) -> Server {
    // 1. Stores (in-memory, lost on restart)
    let rooms: Arc<dyn RoomRepository> = Arc::new(InMemoryRoomRepository::new(clock.clone()));
    let clients: Arc<dyn ClientRegistry> = Arc::new(InMemoryClientRegistry::new());

    // 2. MessagePusher (WebSocket implementation)
    let message_pusher: Arc<dyn MessagePusher> = Arc::new(WebSocketMessagePusher::new());

    // 3. Relay
    let dispatcher = relay_dispatcher(rooms.clone(), clients.clone(), message_pusher, clock);

    // 4. HTTP use cases
    let state = AppState {
        dispatcher: Arc::new(dispatcher),
        get_rooms_usecase: Arc::new(GetRoomsUseCase::new(rooms.clone(), clients.clone())),
        get_room_detail_usecase: Arc::new(GetRoomDetailUseCase::new(rooms, clients)),
        analyze_code_usecase: Arc::new(AnalyzeCodeUseCase::new(
            gateway.clone(),
            config.llm.timeout,
        )),
        generate_docs_usecase: Arc::new(GenerateDocsUseCase::new(gateway, config.llm.timeout)),
    };

    Server::new(state)
}

/// Wire the relay use cases around the given stores.
pub fn relay_dispatcher(
    rooms: Arc<dyn RoomRepository>,
    clients: Arc<dyn ClientRegistry>,
    message_pusher: Arc<dyn MessagePusher>,
    clock: Arc<dyn Clock>,
) -> RelayDispatcher {
    let broadcaster = Arc::new(RoomBroadcaster::new(
        clients.clone(),
        message_pusher.clone(),
    ));

    RelayDispatcher::new(RelayUseCases {
        connect: ConnectClientUseCase::new(
            Arc::new(ConnectionIdFactory::new()),
            message_pusher.clone(),
        ),
        join_room: JoinRoomUseCase::new(rooms.clone(), clients.clone(), broadcaster.clone()),
        send_message: SendMessageUseCase::new(
            rooms.clone(),
            clients.clone(),
            broadcaster.clone(),
            clock,
        ),
        update_file: UpdateFileUseCase::new(rooms.clone(), clients.clone(), broadcaster.clone()),
        create_file: CreateFileUseCase::new(rooms.clone(), clients.clone(), broadcaster.clone()),
        delete_file: DeleteFileUseCase::new(rooms.clone(), clients.clone(), broadcaster.clone()),
        save_snapshot: SaveSnapshotUseCase::new(rooms, clients.clone(), broadcaster.clone()),
        disconnect: DisconnectClientUseCase::new(clients, message_pusher, broadcaster),
    })
}
