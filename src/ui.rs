pub fn render_index(date: &str, balance: i64) -> String {
    INDEX_HTML
        .replace("{{DATE}}", date)
        .replace("{{BALANCE}}", &balance.to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Dodo Coin</title>
  <style>
    :root {
      --bg: #eef7f1;
      --ink: #23302a;
      --muted: #6a7a72;
      --earn: #2f9e67;
      --spend: #d4573b;
      --line: #6be7a4;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 20px 48px rgba(35, 48, 42, 0.14);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(160deg, var(--bg), #fdf7e8 70%);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 28px 16px 44px;
    }

    .app {
      width: min(760px, 100%);
      background: var(--card);
      border-radius: 24px;
      box-shadow: var(--shadow);
      padding: 32px;
      display: grid;
      gap: 24px;
    }

    h1 {
      margin: 0;
      font-family: Georgia, serif;
      font-size: clamp(1.8rem, 4vw, 2.5rem);
    }

    h2 {
      margin: 0 0 10px;
      font-size: 1.15rem;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 14px;
    }

    .stat {
      background: white;
      border-radius: 16px;
      padding: 16px;
      border: 1px solid rgba(35, 48, 42, 0.08);
      display: grid;
      gap: 6px;
    }

    .stat .label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: var(--muted);
    }

    .stat .value {
      font-size: 1.5rem;
      font-weight: 600;
    }

    .stat .value.coins {
      color: var(--earn);
    }

    .tasks {
      display: flex;
      flex-wrap: wrap;
      gap: 10px;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 16px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
      color: white;
      background: var(--ink);
    }

    button:active {
      transform: scale(0.98);
    }

    .btn-earn {
      background: var(--earn);
    }

    .btn-spend {
      background: var(--spend);
    }

    .btn-quiet {
      background: transparent;
      color: var(--ink);
      border: 1px solid rgba(35, 48, 42, 0.25);
    }

    #chart {
      width: 100%;
      max-width: 300px;
      height: 120px;
      background: white;
      border-radius: 12px;
    }

    .chart-line {
      fill: none;
      stroke: var(--line);
      stroke-width: 2;
    }

    .rows {
      max-height: 200px;
      overflow-y: auto;
      margin: 0;
      padding: 0;
      list-style: none;
      display: grid;
      gap: 4px;
      font-variant-numeric: tabular-nums;
    }

    .status {
      min-height: 1.2em;
      color: var(--muted);
    }

    .status[data-type="error"] {
      color: var(--spend);
    }

    .status[data-type="ok"] {
      color: var(--earn);
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Dodo Coin</h1>
    </header>

    <section class="panel">
      <div class="stat">
        <span class="label">Date</span>
        <span id="date" class="value">{{DATE}}</span>
      </div>
      <div class="stat">
        <span class="label">Balance</span>
        <span id="balance" class="value coins">{{BALANCE}}</span>
      </div>
    </section>

    <section>
      <h2>Earn</h2>
      <div class="tasks" id="earn-tasks"></div>
    </section>

    <section>
      <h2>Spend</h2>
      <div class="tasks" id="spend-tasks"></div>
    </section>

    <section class="tasks">
      <button class="btn-earn" id="end-of-day-btn" type="button">End of Day Bonus (+10)</button>
      <button class="btn-quiet" id="reset-btn" type="button">Reset Coins</button>
      <button class="btn-quiet" id="clear-btn" type="button">Clear History</button>
    </section>

    <div class="status" id="status"></div>

    <section>
      <h2>Weekly Summary</h2>
      <div class="panel">
        <div class="stat"><span class="label">Earned</span><span class="value" id="earned">0</span></div>
        <div class="stat"><span class="label">Spent</span><span class="value" id="spent">0</span></div>
        <div class="stat"><span class="label">Net</span><span class="value" id="net">0</span></div>
        <div class="stat"><span class="label">Average / Day</span><span class="value" id="avg">0.0</span></div>
      </div>
    </section>

    <section>
      <h2>Balance Over Time</h2>
      <svg id="chart" viewBox="0 0 300 120" aria-label="Balance chart" role="img">
        <path id="chart-line" class="chart-line" d="" />
      </svg>
    </section>

    <section>
      <h2>Daily Totals</h2>
      <ul class="rows" id="daily-totals"></ul>
    </section>

    <section>
      <h2>History</h2>
      <ul class="rows" id="history"></ul>
    </section>
  </main>

  <script>
    const balanceEl = document.getElementById('balance');
    const dateEl = document.getElementById('date');
    const statusEl = document.getElementById('status');
    const historyEl = document.getElementById('history');
    const dailyTotalsEl = document.getElementById('daily-totals');
    const chartLineEl = document.getElementById('chart-line');

    let shownBalance = Number(balanceEl.textContent) || 0;

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const animateBalance = (target) => {
      const start = shownBalance;
      const startTime = performance.now();
      const step = (time) => {
        const progress = Math.min((time - startTime) / 400, 1);
        balanceEl.textContent = Math.round(start + (target - start) * progress);
        if (progress < 1) {
          requestAnimationFrame(step);
        }
      };
      requestAnimationFrame(step);
      shownBalance = target;
    };

    const signed = (amount) => (amount > 0 ? `+${amount}` : `${amount}`);

    const formatDate = (iso) => {
      const d = new Date(iso);
      const mm = String(d.getMonth() + 1).padStart(2, '0');
      const dd = String(d.getDate()).padStart(2, '0');
      return `${d.getFullYear()}.${mm}.${dd}`;
    };

    const request = async (method, url, body) => {
      const options = { method, headers: {} };
      if (body !== undefined) {
        options.headers['content-type'] = 'application/json';
        options.body = JSON.stringify(body);
      }
      const res = await fetch(url, options);
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res.json();
    };

    const renderRows = (target, rows) => {
      target.replaceChildren(
        ...rows.map((text) => {
          const li = document.createElement('li');
          li.textContent = text;
          return li;
        })
      );
    };

    const renderChart = (points) => {
      const width = 300;
      const height = 120;
      const max = Math.max(...points, 10);
      if (points.length < 2) {
        chartLineEl.setAttribute('d', '');
        return;
      }
      const path = points
        .map((value, i) => {
          const x = (i / (points.length - 1)) * width;
          const y = height - (value / max) * height;
          return `${i === 0 ? 'M' : 'L'} ${x.toFixed(1)} ${y.toFixed(1)}`;
        })
        .join(' ');
      chartLineEl.setAttribute('d', path);
    };

    const refresh = async () => {
      const [balance, history, stats] = await Promise.all([
        request('GET', '/api/balance'),
        request('GET', '/api/history'),
        request('GET', '/api/stats')
      ]);
      dateEl.textContent = balance.date;
      animateBalance(balance.balance);
      renderRows(historyEl, history.map((t) => `${formatDate(t.date)}  ${signed(t.amount)}  ${t.label}`));
      renderRows(dailyTotalsEl, stats.daily_totals.map((d) => `${d.date}  ${signed(d.total)}`));
      const summary = stats.weekly_summary;
      document.getElementById('earned').textContent = `+${summary.earned}`;
      document.getElementById('spent').textContent = summary.spent;
      document.getElementById('net').textContent = summary.net;
      document.getElementById('avg').textContent = summary.avg_per_day.toFixed(1);
      renderChart(stats.balance_points);
    };

    const run = (action, okMessage) => {
      action()
        .then(() => refresh())
        .then(() => setStatus(okMessage || '', 'ok'))
        .catch((err) => setStatus(err.message, 'error'));
    };

    const renderTasks = (target, tasks, className) => {
      target.replaceChildren(
        ...tasks.map((task) => {
          const button = document.createElement('button');
          button.type = 'button';
          button.className = className;
          button.textContent = `${task.label} (${signed(task.coins)})`;
          button.addEventListener('click', () =>
            run(() => request('POST', '/api/transactions', { task: task.label }), task.label)
          );
          return button;
        })
      );
    };

    document.getElementById('end-of-day-btn').addEventListener('click', () => {
      run(() => request('POST', '/api/bonus/end-of-day'), 'End of day bonus claimed!');
    });

    document.getElementById('reset-btn').addEventListener('click', () => {
      if (!confirm('Reset coins to 0?')) {
        return;
      }
      run(() => request('POST', '/api/reset'), 'Balance reset');
    });

    document.getElementById('clear-btn').addEventListener('click', () => {
      if (!confirm('Clear all history?')) {
        return;
      }
      run(() => request('DELETE', '/api/history'), 'History cleared');
    });

    request('GET', '/api/tasks')
      .then((catalog) => {
        renderTasks(document.getElementById('earn-tasks'), catalog.earn, 'btn-earn');
        renderTasks(document.getElementById('spend-tasks'), catalog.spend, 'btn-spend');
      })
      .catch((err) => setStatus(err.message, 'error'));

    run(() => request('POST', '/api/bonus/daily'));
  </script>
</body>
</html>
"#;
