// Static HTML/CSS/JS for the live queue display

pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Cinema Queue</title>
    <style>
        :root { --accent: #00f2fe; }

        body {
            margin: 0;
            min-height: 100vh;
            font-family: 'Nunito', 'Segoe UI', sans-serif;
            background-size: 300% 300%;
            animation: gradient 30s ease infinite;
            color: #333;
            transition: background 1s ease;
        }

        @keyframes gradient {
            0% { background-position: 0% 50%; }
            50% { background-position: 100% 50%; }
            100% { background-position: 0% 50%; }
        }

        .title { text-align: center; color: white; padding: 24px 0 8px; }
        .title h1 { margin: 0; font-size: 2.6rem; text-transform: uppercase; text-shadow: 0 4px 10px rgba(0,0,0,0.3); }

        .layout { display: grid; grid-template-columns: 1fr 1.5fr 1fr; gap: 20px; padding: 20px; }
        @media (max-width: 1000px) { .layout { grid-template-columns: 1fr; } }

        .panel {
            background: rgba(255,255,255,0.85);
            border-radius: 20px;
            padding: 20px;
            box-shadow: 0 8px 32px rgba(0,0,0,0.1);
        }

        button {
            width: 100%;
            margin: 4px 0;
            height: 44px;
            border: none;
            border-radius: 12px;
            font-weight: 800;
            text-transform: uppercase;
            cursor: pointer;
        }
        button.primary { background: var(--accent); color: #111; }
        button.vip { background: #FFD700; color: #8a6500; }
        .themes { display: grid; grid-template-columns: 1fr 1fr; gap: 4px; }

        .stats { display: flex; justify-content: space-around; text-align: center; margin-top: 12px; }
        .stats b { display: block; font-size: 1.5rem; }

        .ticket {
            display: flex;
            align-items: center;
            background: white;
            border-radius: 15px;
            padding: 12px;
            margin-bottom: 10px;
            border-left: 8px solid #ddd;
        }
        .ticket.active { border-left-color: var(--accent); transform: scale(1.02); }
        .ticket.vip { border: 2px solid #FFD700; border-left: 8px solid #FFD700; background: #fffdf0; }
        .avatar { font-size: 2.2rem; margin-right: 14px; }
        .info { flex-grow: 1; }
        .status { float: right; font-size: 0.7rem; font-weight: bold; color: #aaa; }
        .active .status { color: var(--accent); }
        .meta { font-size: 0.8rem; color: #777; }

        .history-item { background: rgba(255,255,255,0.5); border-radius: 10px; padding: 10px; margin-bottom: 8px; }
        .greeting { font-style: italic; color: #555; border-left: 3px solid var(--accent); padding-left: 8px; margin-top: 4px; }
        .empty { text-align: center; padding: 40px; opacity: 0.7; }
    </style>
</head>
<body>
    <div class="title">
        <h1 id="title">🍿 Cinema</h1>
        <div>Smart Queue System</div>
    </div>
    <div class="layout">
        <div class="panel">
            <h3>🎨 Vibe Check</h3>
            <div class="themes" id="themes"></div>
            <h3>🕹️ Actions</h3>
            <button id="vip-toggle">⚪ VIP OFF</button>
            <button id="add">➕ Add Guest</button>
            <button id="serve" class="primary">🎟️ Serve Next</button>
            <button id="reset">🧹 Reset</button>
            <div class="stats">
                <div><b id="in-line">0</b>IN LINE</div>
                <div><b id="wait">0m</b>WAIT</div>
                <div><b id="served">0</b>SERVED</div>
            </div>
        </div>
        <div class="panel" id="line"></div>
        <div class="panel">
            <h3>✅ Served</h3>
            <div id="history"></div>
        </div>
    </div>
    <script>
        let vip = false;

        const post = (path, body) => fetch(path, {
            method: 'POST',
            headers: { 'Content-Type': 'application/json' },
            body: JSON.stringify(body || {})
        });

        const time = (iso) => new Date(iso).toLocaleTimeString([], { hour: '2-digit', minute: '2-digit' });

        const escape = (text) => String(text).replace(/[&<>"]/g, (c) => ({ '&': '&amp;', '<': '&lt;', '>': '&gt;', '"': '&quot;' }[c]));

        function setVip(on) {
            vip = on;
            const toggle = document.getElementById('vip-toggle');
            const add = document.getElementById('add');
            toggle.textContent = vip ? '🌟 VIP ON' : '⚪ VIP OFF';
            toggle.className = vip ? 'vip' : '';
            add.textContent = vip ? 'Add VIP' : '➕ Add Guest';
            add.className = vip ? 'vip' : '';
        }

        function render(state) {
            document.body.style.background = state.theme.background;
            document.body.style.backgroundSize = '300% 300%';
            document.documentElement.style.setProperty('--accent', state.theme.accent);
            document.getElementById('title').textContent = '🍿 ' + state.theme.name + ' Cinema';

            document.getElementById('themes').innerHTML = state.themes.map((t) =>
                `<button data-theme="${t.id}" class="${t.id === state.theme.id ? 'primary' : ''}">${escape(t.name)}</button>`
            ).join('');

            document.getElementById('in-line').textContent = state.in_line;
            document.getElementById('wait').textContent = state.wait_minutes + 'm';
            document.getElementById('served').textContent = state.served;
            document.getElementById('serve').disabled = state.serving;

            const line = document.getElementById('line');
            if (state.line.length === 0) {
                line.innerHTML = '<div class="empty"><div style="font-size:4rem">💤</div><h3>Lobby is Empty</h3><p>Add guests to start the show!</p></div>';
            } else {
                line.innerHTML = state.line.map((t, i) => `
                    <div class="ticket ${i === 0 ? 'active' : ''} ${t.is_priority ? 'vip' : ''}">
                        <div class="avatar">${escape(t.avatar)}</div>
                        <div class="info">
                            <span class="status">${escape(t.status)}</span>
                            <b>#${t.id}</b> ${t.is_priority ? '🌟 VIP' : ''}
                            <div>${escape(t.name)}</div>
                            <div class="meta">${escape(t.snack)} • ${time(t.joined_at)}</div>
                        </div>
                    </div>`).join('');
            }

            document.getElementById('history').innerHTML = state.history.map((t) => `
                <div class="history-item">
                    <b>#${t.id} ${escape(t.name)} ${escape(t.avatar)}</b>
                    <span class="meta">${time(t.served_at)}</span>
                    <div class="greeting">"${escape(t.greeting)}"</div>
                </div>`).join('');
        }

        document.getElementById('vip-toggle').onclick = () => setVip(!vip);
        document.getElementById('add').onclick = async () => {
            await post('/api/enqueue', { vip });
            setVip(false);
        };
        document.getElementById('serve').onclick = () => post('/api/serve');
        document.getElementById('reset').onclick = () => post('/api/reset');
        document.getElementById('themes').onclick = (e) => {
            const id = e.target.dataset.theme;
            if (id) post('/api/theme', { id });
        };

        function connect() {
            const ws = new WebSocket(`ws://${location.host}/ws`);
            ws.onmessage = (event) => render(JSON.parse(event.data));
            ws.onclose = () => setTimeout(connect, 1000);
        }

        fetch('/api/state').then((r) => r.json()).then(render);
        connect();
    </script>
</body>
</html>
"#;
